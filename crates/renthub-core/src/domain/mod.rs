//! # RentHub Core - Domain Module
//!
//! Domain entities for the booking engine.

pub mod booking;
pub mod property;
pub mod user;

// Re-export all entities and enums
pub use booking::{default_end_date, Booking, BookingDecision, BookingStatus};
pub use property::Property;
pub use user::User;
