//! Domain ports: the edges of the hexagon.
//!
//! Driving ports (`SchoolsCommand`, `SchoolsQuery`, `StoreReadiness`) are
//! called by inbound adapters. The driven port (`SchoolRepository`) is
//! implemented by outbound adapters and reports failures through a typed
//! error enum.

mod macros;
pub(crate) use macros::define_port_error;

mod school_repository;
mod schools_command;
mod schools_query;
mod store_readiness;

#[cfg(test)]
pub use school_repository::MockSchoolRepository;
pub use school_repository::{FixtureSchoolRepository, SchoolRepository, SchoolRepositoryError};
pub use schools_command::SchoolsCommand;
pub use schools_query::SchoolsQuery;
pub use store_readiness::StoreReadiness;
