//! Service layer: orchestration between HTTP handlers and persistence.

pub mod todo_service;

pub use todo_service::TodoService;
