// ============================================================================
// RentHub Core - Booking Lifecycle Service
// File: crates/renthub-core/src/services/booking_service.rs
// ============================================================================
//! Booking lifecycle: request creation, landlord decisions, tenant
//! cancellation, and enriched read projections.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use renthub_shared::EntityId;

use crate::domain::{default_end_date, Booking, BookingDecision, BookingStatus};
use crate::error::DomainError;
use crate::repositories::{BookingRepository, PropertyDirectory, UserDirectory};
use crate::services::availability_service::{AvailabilityDecision, AvailabilityEngine};

/// Guard applied when a landlord decision targets a booking that already
/// left `Pending`. The default `Permissive` overwrites the status
/// unconditionally; `Strict` rejects the decision with an invalid-state
/// error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

/// Booking enriched for display with directory facts. Presentation-only;
/// nothing here feeds back into stored state.
#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: EntityId,
    pub property_id: EntityId,
    pub property_title: String,
    pub tenant_id: EntityId,
    pub tenant_name: String,
    pub landlord_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owns all booking state transitions. The only writer of the booking store.
pub struct BookingService<B, P, U>
where
    B: BookingRepository,
    P: PropertyDirectory,
    U: UserDirectory,
{
    bookings: Arc<B>,
    properties: Arc<P>,
    users: Arc<U>,
    availability: AvailabilityEngine<B>,
    // Serializes the availability check and the subsequent insert per
    // property.
    property_locks: DashMap<EntityId, Arc<Mutex<()>>>,
    transition_policy: TransitionPolicy,
}

impl<B, P, U> BookingService<B, P, U>
where
    B: BookingRepository,
    P: PropertyDirectory,
    U: UserDirectory,
{
    pub fn new(bookings: Arc<B>, properties: Arc<P>, users: Arc<U>) -> Self {
        let availability = AvailabilityEngine::new(Arc::clone(&bookings));
        Self {
            bookings,
            properties,
            users,
            availability,
            property_locks: DashMap::new(),
            transition_policy: TransitionPolicy::default(),
        }
    }

    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    fn property_lock(&self, property_id: &EntityId) -> Arc<Mutex<()>> {
        self.property_locks
            .entry(*property_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Create a booking request for a property.
    pub async fn create_booking(
        &self,
        property_id: EntityId,
        tenant_id: EntityId,
        start_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<Booking, DomainError> {
        info!(
            "Booking request for property {} by tenant {} starting {}",
            property_id, tenant_id, start_date
        );

        let lock = self.property_lock(&property_id);
        let _guard = lock.lock().await;

        // 1. Both sides of the request must exist in the directory
        let property = self
            .properties
            .get_property(&property_id)
            .await?
            .ok_or(DomainError::PropertyNotFound(property_id))?;
        let tenant = self
            .users
            .get_user(&tenant_id)
            .await?
            .ok_or(DomainError::TenantNotFound(tenant_id))?;

        // 2. Default rental term when the caller supplies no end date
        let end_date = default_end_date(start_date).ok_or_else(|| {
            DomainError::ValidationError("start date is outside the supported range".to_string())
        })?;

        // 3. Conflict checks against the current booking set
        match self
            .availability
            .check(&property.id, &tenant.id, start_date)
            .await?
        {
            AvailabilityDecision::Deny(reason) => {
                warn!(
                    "Booking request denied for property {} by tenant {}: {:?}",
                    property_id, tenant_id, reason
                );
                Err(DomainError::Conflict(reason))
            }
            AvailabilityDecision::Allow => {
                // 4. Persist the new pending request
                let booking = Booking::new(property.id, tenant.id, start_date, end_date, notes)?;
                let created = self.bookings.create(&booking).await?;
                info!("Booking {} created as {}", created.id, created.status.as_str());
                Ok(created)
            }
        }
    }

    /// Apply a landlord decision to a booking.
    pub async fn decide(
        &self,
        booking_id: EntityId,
        decision: BookingDecision,
    ) -> Result<Booking, DomainError> {
        let mut booking = self
            .bookings
            .find_by_id(&booking_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;

        if self.transition_policy == TransitionPolicy::Strict && booking.status.is_terminal() {
            return Err(DomainError::InvalidState(format!(
                "booking is already {}",
                booking.status.as_str()
            )));
        }

        booking.decide(decision);
        let updated = self.bookings.update(&booking).await?;
        info!("Booking {} decided: {}", updated.id, updated.status.as_str());
        Ok(updated)
    }

    /// Tenant-initiated cancellation of a pending request.
    pub async fn cancel(&self, booking_id: EntityId) -> Result<Booking, DomainError> {
        let mut booking = self
            .bookings
            .find_by_id(&booking_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;

        booking.cancel()?;
        let updated = self.bookings.update(&booking).await?;
        info!("Booking {} cancelled", updated.id);
        Ok(updated)
    }

    pub async fn get_booking(&self, booking_id: EntityId) -> Result<BookingView, DomainError> {
        let booking = self
            .bookings
            .find_by_id(&booking_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;
        self.build_view(booking).await
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: EntityId,
    ) -> Result<Vec<BookingView>, DomainError> {
        let bookings = self.bookings.find_by_tenant(&tenant_id).await?;
        self.build_views(bookings).await
    }

    pub async fn list_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Vec<BookingView>, DomainError> {
        let bookings = self.bookings.find_by_property(&property_id).await?;
        self.build_views(bookings).await
    }

    /// Also usable by administrators to audit the decision queue.
    pub async fn list_by_status(
        &self,
        status: BookingStatus,
    ) -> Result<Vec<BookingView>, DomainError> {
        let bookings = self.bookings.find_by_status(status).await?;
        self.build_views(bookings).await
    }

    async fn build_view(&self, booking: Booking) -> Result<BookingView, DomainError> {
        let property = self
            .properties
            .get_property(&booking.property_id)
            .await?
            .ok_or(DomainError::PropertyNotFound(booking.property_id))?;
        let tenant = self
            .users
            .get_user(&booking.tenant_id)
            .await?
            .ok_or(DomainError::UserNotFound(booking.tenant_id))?;
        let landlord = self
            .users
            .get_user(&property.landlord_id)
            .await?
            .ok_or(DomainError::UserNotFound(property.landlord_id))?;

        Ok(BookingView {
            id: booking.id,
            property_id: property.id,
            property_title: property.title,
            tenant_id: tenant.id,
            tenant_name: tenant.full_name(),
            landlord_name: landlord.full_name(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            notes: booking.notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        })
    }

    async fn build_views(&self, bookings: Vec<Booking>) -> Result<Vec<BookingView>, DomainError> {
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            views.push(self.build_view(booking).await?);
        }
        Ok(views)
    }
}
