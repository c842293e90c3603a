//! Driving port backing the readiness check.

use async_trait::async_trait;

use crate::domain::Error;

/// Reports whether the record store can serve requests.
#[async_trait]
pub trait StoreReadiness: Send + Sync {
    async fn check_ready(&self) -> Result<(), Error>;
}
