//! Storage contract for todo items.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, ItemPatch};
use crate::error::BackendError;

/// Backend-agnostic storage for todo items.
///
/// Implementations must be safe to share across request handlers; every
/// method takes `&self` and interior synchronization is the
/// implementation's concern. A failed update or delete must leave the
/// collection unchanged.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns all items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the backend cannot
    /// be read.
    async fn list_items(&self) -> Result<Vec<Item>, BackendError>;

    /// Inserts a new item with a fresh identifier and `completed = false`.
    ///
    /// Returns the stored item including its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the insert fails.
    async fn add_item(&self, description: &str) -> Result<Item, BackendError>;

    /// Applies a partial update to the item with the given identifier.
    ///
    /// Fields absent from the patch keep their stored values. Returns the
    /// item as stored after the update.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ItemNotFound`] if no item has this
    /// identifier, or [`BackendError::PersistenceError`] on backend
    /// failure.
    async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, BackendError>;

    /// Removes the item with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ItemNotFound`] if no item has this
    /// identifier, or [`BackendError::PersistenceError`] on backend
    /// failure.
    async fn delete_item(&self, id: ItemId) -> Result<(), BackendError>;

    /// Releases backend resources ahead of process exit.
    ///
    /// Called once during shutdown, after the listener has stopped
    /// accepting connections and in-flight requests have drained.
    async fn teardown(&self);
}
