use axum::{
    routing::{get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use renthub_api::{
    handlers::{bookings, health},
    state::AppState,
};
use renthub_core::services::BookingService;
use renthub_infrastructure::database::connection;
use renthub_infrastructure::{PgBookingRepository, PgPropertyDirectory, PgUserDirectory};
use renthub_shared::config::AppConfig;
use renthub_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    renthub_shared::telemetry::init_telemetry();

    info!("RentHub server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(AppError::from(e).into());
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established.");

    // Wire adapters into the booking service
    let booking_repo = Arc::new(PgBookingRepository::new(pool.clone()));
    let property_directory = Arc::new(PgPropertyDirectory::new(pool.clone()));
    let user_directory = Arc::new(PgUserDirectory::new(pool));
    let bookings_service = Arc::new(BookingService::new(
        booking_repo,
        property_directory,
        user_directory,
    ));

    // Create App State
    let state = AppState {
        bookings: bookings_service,
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Booking routes
        .route("/api/v1/bookings", post(bookings::create_booking))
        .route("/api/v1/bookings/{id}", get(bookings::get_booking))
        .route("/api/v1/bookings/{id}/confirm", patch(bookings::confirm_booking))
        .route("/api/v1/bookings/{id}/decline", patch(bookings::decline_booking))
        .route("/api/v1/bookings/{id}/cancel", patch(bookings::cancel_booking))
        .route("/api/v1/bookings/tenant/{tenant_id}", get(bookings::list_by_tenant))
        .route("/api/v1/bookings/property/{property_id}", get(bookings::list_by_property))
        .route("/api/v1/bookings/status/{status}", get(bookings::list_by_status))
        // Add State
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin(config.cors.allowed_origin.parse::<axum::http::HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PATCH,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
