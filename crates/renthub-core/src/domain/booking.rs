// ============================================================================
// RentHub Core - Booking Entity
// File: crates/renthub-core/src/domain/booking.rs
// Description: Tenant booking request and its lifecycle state
// ============================================================================

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use renthub_shared::constants::DEFAULT_LEASE_MONTHS;
use renthub_shared::{new_id, EntityId};

use crate::error::DomainError;

/// Booking status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(BookingStatus::Pending),
            "APPROVED" => Some(BookingStatus::Approved),
            "REJECTED" => Some(BookingStatus::Rejected),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Everything except `Pending` is terminal: no further transition is
    /// defined out of it.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

/// Landlord decision over a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDecision {
    Approve,
    Reject,
}

impl BookingDecision {
    pub fn status(&self) -> BookingStatus {
        match self {
            BookingDecision::Approve => BookingStatus::Approved,
            BookingDecision::Reject => BookingStatus::Rejected,
        }
    }
}

/// Default rental term: one month from the requested start date.
///
/// Returns `None` only when the addition overflows the calendar range.
pub fn default_end_date(start_date: NaiveDate) -> Option<NaiveDate> {
    start_date.checked_add_months(Months::new(DEFAULT_LEASE_MONTHS))
}

/// Booking entity (tenant request for a property over a date range)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    pub property_id: EntityId,
    pub tenant_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub notes: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        property_id: EntityId,
        tenant_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if start_date >= end_date {
            return Err(DomainError::ValidationError(
                "start date must be before end date".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            property_id,
            tenant_id,
            start_date,
            end_date,
            status: BookingStatus::Pending,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a landlord decision. The status is overwritten regardless of the
    /// current value; transition legality is the service's concern.
    pub fn decide(&mut self, decision: BookingDecision) {
        self.status = decision.status();
        self.updated_at = Utc::now();
    }

    /// Tenant-initiated cancellation. Only a pending request can be cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if self.status != BookingStatus::Pending {
            return Err(DomainError::InvalidState(
                "only pending bookings can be cancelled".to_string(),
            ));
        }
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
        Ok(())
    }
}
