//! Counters for user-store traffic.
//!
//! Counters are emitted through the `metrics` facade; whether they go
//! anywhere depends on the recorder installed by the embedding process.

use metrics::{counter, describe_counter};

// === Metric Name Constants ===

/// Users created counter metric name.
pub const METRIC_USERS_CREATED: &str = "users_created_total";
/// Users deleted counter metric name.
pub const METRIC_USERS_DELETED: &str = "users_deleted_total";
/// Rejected creation payloads counter metric name.
pub const METRIC_USER_VALIDATION_REJECTED: &str = "user_validation_rejected_total";
/// Missed get/delete lookups counter metric name.
pub const METRIC_USER_LOOKUPS_MISSED: &str = "user_lookups_missed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_USERS_CREATED, "Total users created");
    describe_counter!(METRIC_USERS_DELETED, "Total users deleted");
    describe_counter!(
        METRIC_USER_VALIDATION_REJECTED,
        "Total user creation payloads rejected by validation"
    );
    describe_counter!(
        METRIC_USER_LOOKUPS_MISSED,
        "Total get/delete requests for IDs not in the store"
    );

    // Touch each counter so they exist at zero from startup.
    counter!(METRIC_USERS_CREATED).absolute(0);
    counter!(METRIC_USERS_DELETED).absolute(0);
    counter!(METRIC_USER_VALIDATION_REJECTED).absolute(0);
    counter!(METRIC_USER_LOOKUPS_MISSED).absolute(0);
}
