// ============================================================================
// RentHub Core - Availability Engine
// File: crates/renthub-core/src/services/availability_service.rs
// ============================================================================
//! Conflict detection for incoming booking requests

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use renthub_shared::EntityId;

use crate::domain::BookingStatus;
use crate::error::DomainError;
use crate::repositories::BookingRepository;

/// Why a booking request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    PendingRequestExists,
    AlreadyApproved,
    DatesUnavailable,
}

impl DenialReason {
    /// Tenant-facing explanation of the rule that fired.
    pub fn message(&self) -> &'static str {
        match self {
            DenialReason::PendingRequestExists => {
                "You already have a pending booking request for this property. \
                 Please wait for the landlord's response or cancel your existing request."
            }
            DenialReason::AlreadyApproved => {
                "You already have an approved booking for this property. \
                 You cannot make another booking request."
            }
            DenialReason::DatesUnavailable => "Property is not available for the selected dates",
        }
    }
}

/// Outcome of an availability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityDecision {
    Allow,
    Deny(DenialReason),
}

/// Decides whether a new booking request conflicts with existing bookings.
/// Purely read-and-decide; never writes, safe to call repeatedly.
pub struct AvailabilityEngine<B: BookingRepository> {
    bookings: Arc<B>,
}

impl<B: BookingRepository> AvailabilityEngine<B> {
    pub fn new(bookings: Arc<B>) -> Self {
        Self { bookings }
    }

    pub async fn check(
        &self,
        property_id: &EntityId,
        tenant_id: &EntityId,
        start_date: NaiveDate,
    ) -> Result<AvailabilityDecision, DomainError> {
        // 1. At most one outstanding request per (property, tenant)
        if self
            .bookings
            .exists_by_property_tenant_status(property_id, tenant_id, BookingStatus::Pending)
            .await?
        {
            debug!("Availability check denied: pending request exists for property {}", property_id);
            return Ok(AvailabilityDecision::Deny(DenialReason::PendingRequestExists));
        }

        // 2. A tenant cannot re-request a property already approved for them
        if self
            .bookings
            .exists_by_property_tenant_status(property_id, tenant_id, BookingStatus::Approved)
            .await?
        {
            debug!("Availability check denied: booking already approved for property {}", property_id);
            return Ok(AvailabilityDecision::Deny(DenialReason::AlreadyApproved));
        }

        // 3. The requested start date must not fall strictly inside an
        //    approved stay on this property, any tenant. Boundary-equal dates
        //    pass, and the request's own end date is not consulted.
        let approved = self
            .bookings
            .find_by_property_and_status(property_id, BookingStatus::Approved)
            .await?;
        for existing in &approved {
            if start_date > existing.start_date && start_date < existing.end_date {
                debug!(
                    "Availability check denied: {} falls inside approved stay {} .. {}",
                    start_date, existing.start_date, existing.end_date
                );
                return Ok(AvailabilityDecision::Deny(DenialReason::DatesUnavailable));
            }
        }

        Ok(AvailabilityDecision::Allow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Booking, BookingDecision};
    use crate::repositories::MockBookingRepository;
    use renthub_shared::new_id;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approved_booking(property_id: EntityId, start: NaiveDate, end: NaiveDate) -> Booking {
        let mut booking = Booking::new(property_id, new_id(), start, end, None).unwrap();
        booking.decide(BookingDecision::Approve);
        booking
    }

    fn engine_with(repo: MockBookingRepository) -> AvailabilityEngine<MockBookingRepository> {
        AvailabilityEngine::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_allow_when_no_bookings_exist() {
        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, _| Ok(false));
        repo.expect_find_by_property_and_status()
            .returning(|_, _| Ok(vec![]));

        let engine = engine_with(repo);
        let decision = engine.check(&new_id(), &new_id(), date(2025, 1, 20)).await.unwrap();
        assert_eq!(decision, AvailabilityDecision::Allow);
    }

    #[tokio::test]
    async fn test_deny_when_pending_request_exists() {
        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, status| Ok(status == BookingStatus::Pending));

        let engine = engine_with(repo);
        let decision = engine.check(&new_id(), &new_id(), date(2025, 1, 20)).await.unwrap();
        assert_eq!(
            decision,
            AvailabilityDecision::Deny(DenialReason::PendingRequestExists)
        );
    }

    #[tokio::test]
    async fn test_deny_when_already_approved_for_tenant() {
        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, status| Ok(status == BookingStatus::Approved));

        let engine = engine_with(repo);
        let decision = engine.check(&new_id(), &new_id(), date(2025, 6, 1)).await.unwrap();
        assert_eq!(
            decision,
            AvailabilityDecision::Deny(DenialReason::AlreadyApproved)
        );
    }

    #[tokio::test]
    async fn test_deny_start_date_strictly_inside_approved_stay() {
        let property_id = new_id();
        let existing = approved_booking(property_id, date(2025, 1, 10), date(2025, 2, 10));

        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, _| Ok(false));
        repo.expect_find_by_property_and_status()
            .returning(move |_, _| Ok(vec![existing.clone()]));

        let engine = engine_with(repo);
        let decision = engine
            .check(&property_id, &new_id(), date(2025, 1, 20))
            .await
            .unwrap();
        assert_eq!(
            decision,
            AvailabilityDecision::Deny(DenialReason::DatesUnavailable)
        );
    }

    #[tokio::test]
    async fn test_allow_start_date_equal_to_stay_boundaries() {
        let property_id = new_id();
        let existing = approved_booking(property_id, date(2025, 1, 10), date(2025, 2, 10));

        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, _| Ok(false));
        repo.expect_find_by_property_and_status()
            .returning(move |_, _| Ok(vec![existing.clone()]));

        let engine = engine_with(repo);

        // Equal to the existing start: passes the strict comparison
        let decision = engine
            .check(&property_id, &new_id(), date(2025, 1, 10))
            .await
            .unwrap();
        assert_eq!(decision, AvailabilityDecision::Allow);

        // Equal to the existing end: also passes
        let decision = engine
            .check(&property_id, &new_id(), date(2025, 2, 10))
            .await
            .unwrap();
        assert_eq!(decision, AvailabilityDecision::Allow);
    }

    #[tokio::test]
    async fn test_allow_start_date_outside_approved_stay() {
        let property_id = new_id();
        let existing = approved_booking(property_id, date(2025, 1, 10), date(2025, 2, 10));

        let mut repo = MockBookingRepository::new();
        repo.expect_exists_by_property_tenant_status()
            .returning(|_, _, _| Ok(false));
        repo.expect_find_by_property_and_status()
            .returning(move |_, _| Ok(vec![existing.clone()]));

        let engine = engine_with(repo);
        let decision = engine
            .check(&property_id, &new_id(), date(2025, 3, 1))
            .await
            .unwrap();
        assert_eq!(decision, AvailabilityDecision::Allow);
    }
}
