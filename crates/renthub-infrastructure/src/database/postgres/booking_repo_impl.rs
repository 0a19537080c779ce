// ============================================================================
// RentHub Infrastructure - PostgreSQL Booking Repository
// File: crates/renthub-infrastructure/src/database/postgres/booking_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use renthub_core::domain::{Booking, BookingStatus};
use renthub_core::error::DomainError;
use renthub_core::repositories::BookingRepository;
use renthub_shared::EntityId;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct BookingRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            property_id: row.property_id,
            tenant_id: row.tenant_id,
            start_date: row.start_date,
            end_date: row.end_date,
            status: BookingStatus::from_str(&row.status).unwrap_or_default(),
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Booking>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding booking by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_tenant(&self, tenant_id: &EntityId) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            FROM bookings
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding bookings by tenant: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_property(&self, property_id: &EntityId) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            FROM bookings
            WHERE property_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding bookings by property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            FROM bookings
            WHERE status = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding bookings by status: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_property_and_status(
        &self,
        property_id: &EntityId,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            FROM bookings
            WHERE property_id = $1 AND status = $2
            ORDER BY start_date
            "#,
        )
        .bind(property_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding bookings by property and status: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn exists_by_property_tenant_status(
        &self,
        property_id: &EntityId,
        tenant_id: &EntityId,
        status: BookingStatus,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE property_id = $1 AND tenant_id = $2 AND status = $3
            )
            "#,
        )
        .bind(property_id)
        .bind(tenant_id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking booking existence: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(exists)
    }

    async fn create(&self, booking: &Booking) -> Result<Booking, DomainError> {
        info!(
            "Creating booking for property {} by tenant {}",
            booking.property_id, booking.tenant_id
        );

        let row: BookingRow = sqlx::query_as(
            r#"
            INSERT INTO bookings (
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            "#,
        )
        .bind(booking.id)
        .bind(booking.property_id)
        .bind(booking.tenant_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status.as_str())
        .bind(&booking.notes)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating booking: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Booking created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, DomainError> {
        let row: BookingRow = sqlx::query_as(
            r#"
            UPDATE bookings
            SET
                start_date = $2,
                end_date = $3,
                status = $4,
                notes = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING
                id, property_id, tenant_id, start_date, end_date,
                status, notes, created_at, updated_at
            "#,
        )
        .bind(booking.id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status.as_str())
        .bind(&booking.notes)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating booking: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}
