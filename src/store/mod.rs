//! In-memory user store.
//!
//! A single map of ID to record plus a monotonic counter, both behind one
//! `RwLock` so that each logical store operation is atomic. IDs start at 1,
//! only ever increase, and are never reused after deletion. Everything here
//! is process-local; nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// A stored user record. Immutable after creation except for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique ID, assigned in strictly increasing order starting at 1.
    pub id: u64,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Email address, non-empty after trimming and containing '@'.
    pub email: String,
    /// Creation timestamp, UTC, serialized as RFC 3339.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Guarded state: counter and records move together under one lock.
#[derive(Debug)]
struct Inner {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

/// Shared in-memory store of all user records.
///
/// Cheap to clone; all clones share the same underlying map. Mutations
/// take the write lock, reads the read lock, so concurrent creates can
/// never observe a stale counter. BTreeMap iteration order is ID order,
/// which equals insertion order because IDs are strictly increasing.
#[derive(Debug, Clone)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                next_id: 1,
                users: BTreeMap::new(),
            })),
        }
    }

    /// Create a user with the next sequential ID and the current UTC time.
    ///
    /// Inputs are already validated by the caller; this cannot fail.
    pub async fn insert(&self, name: String, email: String) -> User {
        let mut inner = self.inner.write().await;

        let user = User {
            id: inner.next_id,
            name,
            email,
            created_at: OffsetDateTime::now_utc(),
        };

        inner.users.insert(user.id, user.clone());
        inner.next_id += 1;
        user
    }

    /// Look up a user by ID.
    pub async fn get(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// All current records in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.values().cloned().collect()
    }

    /// Remove and return the record for `id`, if present.
    pub async fn delete(&self, id: u64) -> Option<User> {
        self.inner.write().await.users.remove(&id)
    }

    /// Number of records currently stored.
    pub async fn count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
