//! HTTP API route definitions.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{create_user, delete_user, get_user, health, list_users, root, AppState};

/// Create the API router.
///
/// Non-numeric `{id}` segments are rejected by the path extractor before
/// the handler runs, so they never produce the handlers' NotFound body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(root))
        // Health endpoint
        .route("/health", get(health))
        // User CRUD
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a minimal health-only router (for startup).
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
