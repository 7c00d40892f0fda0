//! Persistence layer: the item store contract and its backends.
//!
//! Provides the [`ItemStore`] trait for durable storage of todo items.
//! The production implementation uses `sqlx::PgPool` for async
//! PostgreSQL access; an in-memory implementation backs the tests.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;
pub use store::ItemStore;
