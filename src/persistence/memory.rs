//! In-memory implementation of the item store.
//!
//! Keeps items in a `tokio::sync::RwLock<Vec<Item>>` in insertion order.
//! Used by the handler and service tests; carries no state across
//! restarts.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::ItemStore;
use crate::domain::{Item, ItemId, ItemPatch};
use crate::error::BackendError;

/// Item store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        Ok(self.items.read().await.clone())
    }

    async fn add_item(&self, description: &str) -> Result<Item, BackendError> {
        let item = Item {
            id: ItemId::from_uuid(uuid::Uuid::new_v4()),
            description: description.to_string(),
            completed: false,
        };
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, BackendError> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Err(BackendError::ItemNotFound(id));
        };

        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), BackendError> {
        let mut items = self.items.write().await;
        let Some(position) = items.iter().position(|item| item.id == id) else {
            return Err(BackendError::ItemNotFound(id));
        };
        items.remove(position);
        Ok(())
    }

    async fn teardown(&self) {
        tracing::debug!("in-memory store released");
    }
}
