//! # REST API for Donor Management
//!
//! Listing, search, and add/edit/delete by positional index.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{DeleteDonorResponse, DonorForm, DonorResponse, DonorSearchResponse};
use tracing::info;

use super::error::{error_response, invalid_index_response, malformed_body_response, validation_response};
use super::mappers::donor_mapper::DonorMapper;
use crate::domain::commands::donors::{DonorListQuery, DonorSearchQuery};
use crate::domain::DomainError;
use crate::AppState;

/// Query parameters for GET /api/donors
#[derive(Deserialize, Debug)]
pub struct DonorListParams {
    pub page: Option<usize>,
    pub blood_group: Option<String>,
}

/// Query parameters for GET /api/donors/search
#[derive(Deserialize, Debug)]
pub struct DonorSearchParams {
    pub q: Option<String>,
    pub blood_group: Option<String>,
    /// Only `eligible=true` enables the filter
    pub eligible: Option<String>,
}

/// List one page of donors
pub async fn list_donors(
    State(state): State<AppState>,
    Query(params): Query<DonorListParams>,
) -> impl IntoResponse {
    info!("GET /api/donors - query: {:?}", params);

    let blood_group = params.blood_group.filter(|g| !g.is_empty());
    let query = DonorListQuery {
        page: params.page.unwrap_or(1),
        blood_group: blood_group.clone(),
    };

    match state.donor_service.list_donors(query).await {
        Ok(result) => (StatusCode::OK, Json(DonorMapper::to_list_dto(result, blood_group))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a single donor by index
pub async fn get_donor(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> impl IntoResponse {
    let Path(index) = match index {
        Ok(index) => index,
        Err(rejection) => return invalid_index_response(rejection),
    };
    info!("GET /api/donors/{}", index);

    match state.donor_service.get_donor(index).await {
        Ok(donor) => (StatusCode::OK, Json(DonorMapper::to_indexed_dto(donor))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Add a donor
pub async fn create_donor(
    State(state): State<AppState>,
    form: Result<Json<DonorForm>, JsonRejection>,
) -> impl IntoResponse {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return malformed_body_response(rejection),
    };
    info!("POST /api/donors - name: {}", form.name);

    match state.donor_service.add_donor(DonorMapper::to_input(form.clone())).await {
        Ok(donor) => (
            StatusCode::CREATED,
            Json(DonorResponse {
                donor: DonorMapper::to_indexed_dto(donor),
                success_message: "Donor added successfully!".to_string(),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(errors)) => validation_response(errors, form),
        Err(e) => error_response(e),
    }
}

/// Replace the donor at an index
pub async fn update_donor(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    form: Result<Json<DonorForm>, JsonRejection>,
) -> impl IntoResponse {
    let Path(index) = match index {
        Ok(index) => index,
        Err(rejection) => return invalid_index_response(rejection),
    };
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return malformed_body_response(rejection),
    };
    info!("PUT /api/donors/{} - name: {}", index, form.name);

    match state.donor_service.edit_donor(index, DonorMapper::to_input(form.clone())).await {
        Ok(donor) => (
            StatusCode::OK,
            Json(DonorResponse {
                donor: DonorMapper::to_indexed_dto(donor),
                success_message: "Donor updated successfully!".to_string(),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(errors)) => validation_response(errors, form),
        Err(e) => error_response(e),
    }
}

/// Delete the donor at an index
pub async fn delete_donor(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> impl IntoResponse {
    let Path(index) = match index {
        Ok(index) => index,
        Err(rejection) => return invalid_index_response(rejection),
    };
    info!("DELETE /api/donors/{}", index);

    match state.donor_service.delete_donor(index).await {
        Ok(result) => (
            StatusCode::OK,
            Json(DeleteDonorResponse {
                deleted_name: result.deleted_name,
                success_message: result.success_message,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Search donors by text, blood group and eligibility
pub async fn search_donors(
    State(state): State<AppState>,
    Query(params): Query<DonorSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/donors/search - query: {:?}", params);

    let query = DonorSearchQuery {
        query: params.q,
        blood_group: params.blood_group,
        eligible_only: params.eligible.as_deref() == Some("true"),
    };

    match state.donor_service.search_donors(query).await {
        Ok(donors) => (
            StatusCode::OK,
            Json(DonorSearchResponse {
                donors: DonorMapper::to_indexed_dtos(donors),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
