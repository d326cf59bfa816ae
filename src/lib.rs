//! In-memory user CRUD and health-check HTTP service.
//!
//! A small axum service exposing a liveness endpoint and user-record CRUD
//! over a process-local store. Nothing survives a restart; the store is a
//! single map behind a lock, and IDs only ever count up.
//!
//! # Endpoints
//!
//! ```text
//! GET    /            service metadata
//! GET    /health      liveness probe
//! GET    /users       list all users
//! POST   /users       create a user
//! GET    /users/{id}  fetch one user
//! DELETE /users/{id}  delete one user
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: In-memory user store
//! - [`api`]: HTTP handlers and routing
//! - [`metrics`]: Counter definitions
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
