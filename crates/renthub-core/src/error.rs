//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use crate::services::availability_service::DenialReason;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Property not found: {0}")]
    PropertyNotFound(Uuid),

    #[error("Tenant not found: {0}")]
    TenantNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("{}", .0.message())]
    Conflict(DenialReason),

    #[error("{0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
