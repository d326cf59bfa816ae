//! HTTP API module for the service metadata, health, and user endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
