// ============================================================================
// RentHub Infrastructure - PostgreSQL Property Directory
// File: crates/renthub-infrastructure/src/database/postgres/property_directory_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use renthub_core::domain::Property;
use renthub_core::error::DomainError;
use renthub_core::repositories::PropertyDirectory;
use renthub_shared::EntityId;

/// Read-only adapter over the listing service's `properties` table.
pub struct PgPropertyDirectory {
    pool: PgPool,
}

impl PgPropertyDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PropertyRow {
    pub id: Uuid,
    pub landlord_id: Uuid,
    pub title: String,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            landlord_id: row.landlord_id,
            title: row.title,
        }
    }
}

#[async_trait]
impl PropertyDirectory for PgPropertyDirectory {
    async fn get_property(&self, id: &EntityId) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            SELECT id, landlord_id, title
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding property by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
