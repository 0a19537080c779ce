//! Repository traits (ports)

pub mod booking_repository;
pub mod property_directory;
pub mod user_directory;

pub use booking_repository::BookingRepository;
pub use property_directory::PropertyDirectory;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use property_directory::MockPropertyDirectory;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
