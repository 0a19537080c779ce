//! User directory trait (port to the external user registry)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use renthub_shared::EntityId;

use crate::domain::User;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, id: &EntityId) -> Result<Option<User>, DomainError>;
}
