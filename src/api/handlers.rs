//! HTTP API handlers.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use metrics::counter;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::metrics::{
    METRIC_USERS_CREATED, METRIC_USERS_DELETED, METRIC_USER_LOOKUPS_MISSED,
    METRIC_USER_VALIDATION_REJECTED,
};
use crate::store::{User, UserStore};

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "user-health-api";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared user store.
    pub store: UserStore,
    /// Version label from configuration.
    pub version: String,
}

impl AppState {
    /// Create new app state with an empty store.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            store: UserStore::new(),
            version: version.into(),
        }
    }
}

/// Root metadata response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name.
    pub service: &'static str,
    /// Version label.
    pub version: String,
    /// Documented endpoint paths.
    pub docs: DocsMap,
}

/// Documented endpoint paths in the root response.
#[derive(Debug, Serialize)]
pub struct DocsMap {
    /// Liveness endpoint.
    pub health: &'static str,
    /// User collection endpoint.
    pub users: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Current UTC time, RFC 3339.
    #[serde(with = "time::serde::rfc3339")]
    pub time_utc: OffsetDateTime,
}

/// User collection response.
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    /// Number of records.
    pub count: usize,
    /// All records in insertion order.
    pub users: Vec<User>,
}

/// User creation request body. All fields optional; validation decides.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Deletion confirmation response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// ID of the removed record.
    pub deleted: u64,
}

/// Root handler - static service metadata. Always 200.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        service: SERVICE_NAME,
        version: state.version,
        docs: DocsMap {
            health: "/health",
            users: "/users",
        },
    })
}

/// Health check handler - always returns 200. Pure liveness, no
/// dependency checks.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        time_utc: OffsetDateTime::now_utc(),
    })
}

/// List handler - all users in store order. Always 200, even when empty.
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.store.list().await;

    Json(ListUsersResponse {
        count: users.len(),
        users,
    })
}

/// Create handler - validates name/email and stores a new user.
///
/// The body is parsed permissively: an absent or unparseable JSON body
/// degrades to an empty object, and validation then rejects the missing
/// fields with 400 rather than surfacing a parse error.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request: CreateUserRequest = serde_json::from_slice(&body).unwrap_or_default();

    let name = request.name.as_deref().unwrap_or("").trim();
    let email = request.email.as_deref().unwrap_or("").trim();

    if name.is_empty() || email.is_empty() || !email.contains('@') {
        counter!(METRIC_USER_VALIDATION_REJECTED).increment(1);
        debug!(name, email, "rejected user creation payload");
        return Err(ApiError::validation("Provide valid 'name' and 'email'."));
    }

    let user = state.store.insert(name.to_string(), email.to_string()).await;

    counter!(METRIC_USERS_CREATED).increment(1);
    info!(id = user.id, "created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get handler - looks up one user by ID. 404 if absent.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    match state.store.get(id).await {
        Some(user) => Ok(Json(user)),
        None => {
            counter!(METRIC_USER_LOOKUPS_MISSED).increment(1);
            Err(ApiError::user_not_found())
        }
    }
}

/// Delete handler - removes one user by ID. 404 if absent; deleting the
/// same ID twice yields 200 then 404.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    match state.store.delete(id).await {
        Some(_) => {
            counter!(METRIC_USERS_DELETED).increment(1);
            info!(id, "deleted user");
            Ok(Json(DeleteResponse { deleted: id }))
        }
        None => {
            counter!(METRIC_USER_LOOKUPS_MISSED).increment(1);
            Err(ApiError::user_not_found())
        }
    }
}
