//! PostgreSQL persistence adapter built on Diesel.
//!
//! Row structs (`models`) and table definitions (`schema`) stay private to
//! this module; only the repository, the pool and the migration runner are
//! exported.
//!
//! ```ignore
//! use school_locator::outbound::persistence::{DbPool, DieselSchoolRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/schools")).await?;
//! let repository = DieselSchoolRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_school_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_school_repository::DieselSchoolRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
