//! Runtime settings loaded via OrthoConfig.
//!
//! Every field can be set with a `SCHOOLS_`-prefixed environment variable
//! (e.g. `SCHOOLS_DATABASE_URL`) or the matching command-line flag.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use school_locator::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHOOLS")]
pub struct ServerSettings {
    /// Listen address, `host:port`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it the server keeps schools in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept open.
    pub pool_min_idle: Option<u32>,
    /// How long a request waits for a free connection.
    pub pool_connection_timeout_ms: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Parse the listen address, falling back to `0.0.0.0:3000`.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Blank URLs count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool configuration, when a database is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        let mut config = PoolConfig::new(url);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.pool_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(timeout_ms) = self.pool_connection_timeout_ms {
            config = config.with_connection_timeout(Duration::from_millis(timeout_ms));
        }
        Some(config)
    }
}
