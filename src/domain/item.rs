//! Todo item model and type-safe identifier.
//!
//! [`ItemId`] is a newtype wrapper around [`uuid::Uuid`] providing type
//! safety so that item identifiers cannot be confused with other UUIDs.
//! Identifiers are generated by the persistence layer and immutable for
//! the lifetime of the item.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a todo item.
///
/// Wraps a UUID generated by the persistence layer at insertion time and
/// immutable thereafter. Used as the lookup key for updates and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ItemId(uuid::Uuid);

impl ItemId {
    /// Creates an `ItemId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for ItemId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ItemId> for uuid::Uuid {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// A todo-list entry.
///
/// Serialized on the wire as `{"id", "description", "completed"}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-generated identifier.
    pub id: ItemId,
    /// Free-form text content.
    pub description: String,
    /// Completion status. Defaults to `false` on creation.
    pub completed: bool,
}

/// Partial update for an existing item.
///
/// `None` fields are left untouched by [`update_item`], so a payload
/// carrying only `completed` never clobbers the description.
///
/// [`update_item`]: crate::persistence::ItemStore::update_item
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement completion status, if any.
    pub completed: Option<bool>,
}
