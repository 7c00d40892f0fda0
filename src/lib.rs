//! # todo-backend
//!
//! Minimal REST backend for a todo-list application, augmented with
//! Prometheus metrics instrumentation.
//!
//! Every `/api` route is a thin adapter over the persistence layer;
//! requests on other paths fall through to static file serving. A
//! middleware counts API requests by HTTP method, and `/metrics`
//! renders the registry in the text exposition format.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Metrics middleware (observability/)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Static files (tower-http ServeDir)
//!     │
//!     ├── TodoService (service/)
//!     │
//!     └── PostgreSQL ItemStore (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod persistence;
pub mod service;
