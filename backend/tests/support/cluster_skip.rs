//! `SKIP_TEST_CLUSTER` policy for suites that need embedded PostgreSQL.

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Reports a cluster setup failure.
///
/// Returns `None` with a skip marker when `SKIP_TEST_CLUSTER` is truthy and
/// panics otherwise, so a broken cluster fails CI instead of passing silently.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
