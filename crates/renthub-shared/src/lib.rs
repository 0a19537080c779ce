//! # RentHub Shared
//!
//! Shared utilities, types, and telemetry for the RentHub application.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
