//! # REST API for Registration and Login

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{LoginRequest, LoginResponse, LogoutResponse, RegisterUserRequest, RegisterUserResponse};
use tracing::info;

use super::error::{error_response, malformed_body_response, validation_response};
use super::mappers::user_mapper::UserMapper;
use crate::domain::DomainError;
use crate::io::session::{CurrentUser, SessionUser};
use crate::AppState;

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    request: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return malformed_body_response(rejection),
    };
    info!("POST /api/register - email: {}", request.email);

    let echoed = UserMapper::redacted_registration(&request);
    match state.user_service.register(UserMapper::to_register_command(request)).await {
        Ok(profile) => (
            StatusCode::CREATED,
            Json(RegisterUserResponse {
                email: profile.email,
                success_message: "Registration successful! Please login.".to_string(),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(errors)) => validation_response(errors, echoed),
        Err(e) => error_response(e),
    }
}

/// Check credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return malformed_body_response(rejection),
    };
    info!("POST /api/login - email: {}", request.email);

    match state.user_service.login(UserMapper::to_login_command(request)).await {
        Ok(profile) => {
            let token = state.sessions.create(SessionUser {
                email: profile.email.clone(),
                fullname: profile.fullname.clone(),
            });
            (
                StatusCode::OK,
                Json(LoginResponse {
                    token,
                    email: profile.email,
                    fullname: profile.fullname,
                    success_message: "Logged in successfully!".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Close the caller's session
pub async fn logout(State(state): State<AppState>, current: CurrentUser) -> impl IntoResponse {
    info!("POST /api/logout - email: {}", current.user.email);

    state.sessions.remove(&current.token);
    (
        StatusCode::OK,
        Json(LogoutResponse {
            success_message: "You have been logged out successfully.".to_string(),
        }),
    )
}
