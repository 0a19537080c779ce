//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::Json;

use renthub_core::error::DomainError;

use crate::response::ApiResponse;

fn error_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::PropertyNotFound(_)
        | DomainError::TenantNotFound(_)
        | DomainError::UserNotFound(_)
        | DomainError::BookingNotFound(_) => "NOT_FOUND",
        DomainError::Conflict(_) => "CONFLICT",
        DomainError::InvalidState(_) => "INVALID_STATE",
        DomainError::ValidationError(_) => "VALIDATION_ERROR",
        DomainError::DatabaseError(_) => "INTERNAL_ERROR",
    }
}

fn status_code(err: &DomainError) -> StatusCode {
    match err {
        DomainError::PropertyNotFound(_)
        | DomainError::TenantNotFound(_)
        | DomainError::UserNotFound(_)
        | DomainError::BookingNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
        DomainError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turn a domain failure into the error half of a handler result. Database
/// details stay in the logs; the client sees a generic message.
pub fn map_domain_error(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let message = match &err {
        DomainError::DatabaseError(_) => "An internal error occurred".to_string(),
        other => other.to_string(),
    };
    (
        status_code(&err),
        Json(ApiResponse::error(error_code(&err), &message)),
    )
}

pub fn validation_error(message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("VALIDATION_ERROR", message)),
    )
}
