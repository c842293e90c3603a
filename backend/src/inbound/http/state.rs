//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{SchoolsCommand, SchoolsQuery, StoreReadiness};

/// Dependency bundle for the JSON API and the HTML pages.
#[derive(Clone)]
pub struct HttpState {
    pub schools: Arc<dyn SchoolsCommand>,
    pub schools_query: Arc<dyn SchoolsQuery>,
    pub readiness: Arc<dyn StoreReadiness>,
}

impl HttpState {
    pub fn new(
        schools: Arc<dyn SchoolsCommand>,
        schools_query: Arc<dyn SchoolsQuery>,
        readiness: Arc<dyn StoreReadiness>,
    ) -> Self {
        Self {
            schools,
            schools_query,
            readiness,
        }
    }

    /// Wire every port to one service value implementing all of them.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use school_locator::domain::SchoolsService;
    /// use school_locator::domain::ports::FixtureSchoolRepository;
    /// use school_locator::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(SchoolsService::new(Arc::new(FixtureSchoolRepository)));
    /// let state = HttpState::from_service(service);
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: SchoolsCommand + SchoolsQuery + StoreReadiness + 'static,
    {
        Self {
            schools: service.clone(),
            schools_query: service.clone(),
            readiness: service,
        }
    }
}
