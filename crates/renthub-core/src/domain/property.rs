//! Property read model (owned by the external directory)

use serde::{Deserialize, Serialize};

use renthub_shared::EntityId;

/// Facts about a listed property this core needs: existence, the landlord
/// behind it, and the title shown in booking views. Immutable during a
/// booking decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    pub landlord_id: EntityId,
    pub title: String,
}
