//! Todo service: orchestrates item operations over the configured store.

use std::fmt;
use std::sync::Arc;

use crate::domain::{Item, ItemId, ItemPatch};
use crate::error::BackendError;
use crate::persistence::ItemStore;

/// Orchestration layer for all item operations.
///
/// Stateless coordinator: owns a reference to the [`ItemStore`] backend
/// and adds logging around mutations. Handlers never talk to the store
/// directly.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn ItemStore>,
}

impl TodoService {
    /// Creates a new `TodoService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Returns all items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError::PersistenceError`] on store failure.
    pub async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        self.store.list_items().await
    }

    /// Creates a new incomplete item with the given description.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError::PersistenceError`] on store failure.
    pub async fn add_item(&self, description: &str) -> Result<Item, BackendError> {
        let item = self.store.add_item(description).await?;
        tracing::info!(id = %item.id, "item added");
        Ok(item)
    }

    /// Applies a partial update to the item with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError::ItemNotFound`] if the identifier is
    /// unknown, or a [`BackendError::PersistenceError`] on store failure.
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, BackendError> {
        let item = self.store.update_item(id, patch).await?;
        tracing::info!(%id, "item updated");
        Ok(item)
    }

    /// Removes the item with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError::ItemNotFound`] if the identifier is
    /// unknown, or a [`BackendError::PersistenceError`] on store failure.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), BackendError> {
        self.store.delete_item(id).await?;
        tracing::info!(%id, "item deleted");
        Ok(())
    }

    /// Releases the underlying store ahead of process exit.
    pub async fn teardown(&self) {
        self.store.teardown().await;
    }
}

impl fmt::Debug for TodoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoService").finish_non_exhaustive()
    }
}
