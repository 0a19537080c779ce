use std::sync::Arc;

use renthub_core::services::BookingService;
use renthub_infrastructure::{PgBookingRepository, PgPropertyDirectory, PgUserDirectory};
use renthub_shared::config::AppConfig;

pub type Bookings = BookingService<PgBookingRepository, PgPropertyDirectory, PgUserDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<Bookings>,
    pub config: AppConfig,
}
