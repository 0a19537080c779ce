//! Domain services (business logic)

pub mod availability_service;
pub mod booking_service;

pub use availability_service::{AvailabilityDecision, AvailabilityEngine, DenialReason};
pub use booking_service::{BookingService, BookingView, TransitionPolicy};
