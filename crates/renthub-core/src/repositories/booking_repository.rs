//! Booking repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use renthub_shared::EntityId;

use crate::domain::{Booking, BookingStatus};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Booking>, DomainError>;
    async fn find_by_tenant(&self, tenant_id: &EntityId) -> Result<Vec<Booking>, DomainError>;
    async fn find_by_property(&self, property_id: &EntityId) -> Result<Vec<Booking>, DomainError>;
    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError>;
    async fn find_by_property_and_status(
        &self,
        property_id: &EntityId,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, DomainError>;
    async fn exists_by_property_tenant_status(
        &self,
        property_id: &EntityId,
        tenant_id: &EntityId,
        status: BookingStatus,
    ) -> Result<bool, DomainError>;
    async fn create(&self, booking: &Booking) -> Result<Booking, DomainError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, DomainError>;
}
