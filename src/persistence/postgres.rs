//! PostgreSQL implementation of the item store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::store::ItemStore;
use crate::config::BackendConfig;
use crate::domain::{Item, ItemId, ItemPatch};
use crate::error::BackendError;

/// PostgreSQL-backed item store using `sqlx::PgPool`.
///
/// The pool is the single shared database handle for the process; it is
/// created once at startup and closed once during shutdown.
#[derive(Debug, Clone)]
pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    /// Creates an item store from an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to PostgreSQL and prepares the schema.
    ///
    /// Builds the connection pool from the configured limits, then runs
    /// the embedded migrations so the `items` table exists before the
    /// first request is served.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError::PersistenceError`] if the database is
    /// unreachable or a migration fails.
    pub async fn connect(config: &BackendConfig) -> Result<Self, BackendError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        tracing::info!("database schema ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, description, completed FROM items ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, description, completed)| Item {
                id: ItemId::from_uuid(id),
                description,
                completed,
            })
            .collect())
    }

    async fn add_item(&self, description: &str) -> Result<Item, BackendError> {
        let (id, description, completed) = sqlx::query_as::<_, (Uuid, String, bool)>(
            "INSERT INTO items (description) VALUES ($1) RETURNING id, description, completed",
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(Item {
            id: ItemId::from_uuid(id),
            description,
            completed,
        })
    }

    async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, BackendError> {
        let row = sqlx::query_as::<_, (Uuid, String, bool)>(
            "UPDATE items SET description = COALESCE($2, description), \
             completed = COALESCE($3, completed) WHERE id = $1 \
             RETURNING id, description, completed",
        )
        .bind(id.as_uuid())
        .bind(patch.description)
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        match row {
            Some((id, description, completed)) => Ok(Item {
                id: ItemId::from_uuid(id),
                description,
                completed,
            }),
            None => Err(BackendError::ItemNotFound(id)),
        }
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), BackendError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BackendError::ItemNotFound(id));
        }
        Ok(())
    }

    async fn teardown(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
