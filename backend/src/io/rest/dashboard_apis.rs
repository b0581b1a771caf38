//! # REST API for the Dashboard

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::error::error_response;
use super::mappers::donor_mapper::DonorMapper;
use crate::io::session::CurrentUser;
use crate::AppState;

/// Donor totals and per blood group counts. Requires a session.
pub async fn get_dashboard(State(state): State<AppState>, current: CurrentUser) -> impl IntoResponse {
    info!("GET /api/dashboard - user: {}", current.user.email);

    match state.donor_service.dashboard().await {
        Ok(result) => (
            StatusCode::OK,
            Json(DonorMapper::to_dashboard_dto(result, Some(current.user.fullname))),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
