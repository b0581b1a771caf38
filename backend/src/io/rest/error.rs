use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use shared::{ErrorResponse, ValidationErrorResponse};
use tracing::{error, warn};

use crate::domain::DomainError;

/// Where clients are sent when a donor index no longer exists
pub const DONOR_LISTING_PATH: &str = "/api/donors";

/// 422 carrying every rule violation and the submitted form
pub fn validation_response<T: Serialize>(errors: Vec<String>, form: T) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse { errors, form }),
    )
        .into_response()
}

fn message(status: StatusCode, message: impl Into<String>, redirect_to: Option<&str>) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
            redirect_to: redirect_to.map(str::to_string),
        }),
    )
        .into_response()
}

/// Map a domain error to a response
pub fn error_response(e: DomainError) -> Response {
    match e {
        DomainError::Validation(errors) => validation_response(errors, serde_json::Value::Null),
        DomainError::NotFound(msg) => message(StatusCode::NOT_FOUND, msg, Some(DONOR_LISTING_PATH)),
        DomainError::InvalidCredentials => {
            message(StatusCode::UNAUTHORIZED, "Invalid email or password", None)
        }
        DomainError::DateParse { .. } => message(StatusCode::BAD_REQUEST, e.to_string(), None),
        DomainError::PasswordHash(_) | DomainError::Store(_) => {
            error!("Request failed: {}", e);
            message(StatusCode::INTERNAL_SERVER_ERROR, "Storage operation failed", None)
        }
    }
}

/// A donor index that does not parse is treated like one that is out of range
pub fn invalid_index_response(rejection: PathRejection) -> Response {
    warn!("Malformed donor index: {}", rejection.body_text());
    error_response(DomainError::NotFound("Invalid donor ID".to_string()))
}

/// A body that is not a well-formed form gets the same 422 shape as a rule violation
pub fn malformed_body_response(rejection: JsonRejection) -> Response {
    warn!("Malformed request body: {}", rejection.body_text());
    validation_response(vec![rejection.body_text()], serde_json::Value::Null)
}
