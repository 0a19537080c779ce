// ============================================================================
// RentHub API - Booking Handlers
// File: crates/renthub-api/src/handlers/bookings.rs
// ============================================================================
//! Booking HTTP handlers (request, decide, cancel, reads)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use renthub_core::domain::{BookingDecision, BookingStatus};

use crate::dto::{BookingDto, BookingViewDto, CreateBookingRequest};
use crate::error::{map_domain_error, validation_error};
use crate::response::ApiResponse;
use crate::state::AppState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// Create booking - POST /api/v1/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), HandlerError> {
    if let Err(errors) = payload.validate() {
        return Err(validation_error(&errors.to_string()));
    }

    let booking = state
        .bookings
        .create_booking(
            payload.property_id,
            payload.tenant_id,
            payload.start_date,
            payload.notes,
        )
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(booking.into())),
    ))
}

/// Get booking - GET /api/v1/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingViewDto>>, HandlerError> {
    let view = state
        .bookings
        .get_booking(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(view.into())))
}

/// Confirm booking - PATCH /api/v1/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDto>>, HandlerError> {
    let booking = state
        .bookings
        .decide(id, BookingDecision::Approve)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

/// Decline booking - PATCH /api/v1/bookings/{id}/decline
pub async fn decline_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDto>>, HandlerError> {
    let booking = state
        .bookings
        .decide(id, BookingDecision::Reject)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

/// Cancel booking - PATCH /api/v1/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDto>>, HandlerError> {
    let booking = state
        .bookings
        .cancel(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

/// List bookings by tenant - GET /api/v1/bookings/tenant/{tenant_id}
pub async fn list_by_tenant(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<BookingViewDto>>>, HandlerError> {
    let views = state
        .bookings
        .list_by_tenant(tenant_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(
        views.into_iter().map(Into::into).collect(),
    )))
}

/// List bookings by property - GET /api/v1/bookings/property/{property_id}
pub async fn list_by_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<BookingViewDto>>>, HandlerError> {
    let views = state
        .bookings
        .list_by_property(property_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(
        views.into_iter().map(Into::into).collect(),
    )))
}

/// List bookings by status - GET /api/v1/bookings/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ApiResponse<Vec<BookingViewDto>>>, HandlerError> {
    let status = BookingStatus::from_str(&status.to_uppercase())
        .ok_or_else(|| validation_error(&format!("Unknown booking status: {}", status)))?;

    let views = state
        .bookings
        .list_by_status(status)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(
        views.into_iter().map(Into::into).collect(),
    )))
}
