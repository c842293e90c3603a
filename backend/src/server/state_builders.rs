//! Wiring of driving ports to their store.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::warn;

use school_locator::domain::SchoolsService;
use school_locator::inbound::http::state::HttpState;
use school_locator::outbound::memory::InMemorySchoolRepository;
use school_locator::outbound::persistence::DieselSchoolRepository;

use super::ServerConfig;

/// Build handler state backed by PostgreSQL when a pool is configured,
/// otherwise by a process-local store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let repository = DieselSchoolRepository::new(pool.clone());
            HttpState::from_service(Arc::new(SchoolsService::new(Arc::new(repository))))
        }
        None => {
            warn!("no database configured; schools are kept in memory and lost on restart");
            let repository = InMemorySchoolRepository::new(Arc::new(DefaultClock));
            HttpState::from_service(Arc::new(SchoolsService::new(Arc::new(repository))))
        }
    }
}
