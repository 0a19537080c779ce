//! PostgreSQL repository implementations

pub mod booking_repo_impl;
pub mod property_directory_impl;
pub mod user_directory_impl;

pub use booking_repo_impl::PgBookingRepository;
pub use property_directory_impl::PgPropertyDirectory;
pub use user_directory_impl::PgUserDirectory;
