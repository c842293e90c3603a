//! HTTP server configuration object.

use std::net::SocketAddr;

use school_locator::outbound::persistence::DbPool;

/// Inputs for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Serve from PostgreSQL instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
