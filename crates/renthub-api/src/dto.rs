//! Request payloads and response DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use renthub_core::domain::Booking;
use renthub_core::services::BookingView;
use renthub_shared::constants::MAX_NOTES_LENGTH;

/// Booking request payload
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    #[validate(length(max = MAX_NOTES_LENGTH, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Booking as stored, returned from mutations
#[derive(Debug, Serialize)]
pub struct BookingDto {
    pub id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            property_id: booking.property_id,
            tenant_id: booking.tenant_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status.as_str().to_string(),
            notes: booking.notes,
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
        }
    }
}

/// Booking enriched with directory display facts, returned from reads
#[derive(Debug, Serialize)]
pub struct BookingViewDto {
    pub id: Uuid,
    pub property_id: Uuid,
    pub property_title: String,
    pub tenant_id: Uuid,
    pub tenant_name: String,
    pub landlord_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingView> for BookingViewDto {
    fn from(view: BookingView) -> Self {
        Self {
            id: view.id,
            property_id: view.property_id,
            property_title: view.property_title,
            tenant_id: view.tenant_id,
            tenant_name: view.tenant_name,
            landlord_name: view.landlord_name,
            start_date: view.start_date,
            end_date: view.end_date,
            status: view.status.as_str().to_string(),
            notes: view.notes,
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}
