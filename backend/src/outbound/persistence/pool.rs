//! Shared PostgreSQL connection pool (diesel-async over bb8).
//!
//! The pool is built once at startup and handed to adapters explicitly.
//! [`DbPool::get`] returns an RAII guard; the connection goes back to the pool
//! when the guard drops, on every exit path.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Pool construction and checkout failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool sizing and checkout limits.
///
/// Defaults: at most 10 connections, 2 kept idle, and callers wait up to two
/// seconds for a free connection before the request fails.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use school_locator::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/schools")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_millis(500));
/// assert_eq!(config.max_size(), 4);
/// assert_eq!(config.connection_timeout(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    pub const DEFAULT_MAX_SIZE: u32 = 10;
    pub const DEFAULT_MIN_IDLE: u32 = 2;
    pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_millis(2_000);

    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: Self::DEFAULT_MAX_SIZE,
            min_idle: Some(Self::DEFAULT_MIN_IDLE),
            connection_timeout: Self::DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// `min_idle` is capped at `max_size` when the pool is built.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle.map(|idle| idle.min(self.max_size))
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed, for
    /// example because the URL is malformed or the initial idle connections
    /// cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size())
            .min_idle(config.min_idle())
            .connection_timeout(config.connection_timeout())
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection frees up within the
    /// configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
