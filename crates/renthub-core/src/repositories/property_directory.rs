//! Property directory trait (port to the external property listing)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use renthub_shared::EntityId;

use crate::domain::Property;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    async fn get_property(&self, id: &EntityId) -> Result<Option<Property>, DomainError>;
}
