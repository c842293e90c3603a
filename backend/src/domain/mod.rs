//! Domain model and use cases for the school register.
//!
//! Purpose: keep the business rules (validation, ranking, error semantics)
//! independent of HTTP and SQL. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - `School`, `NewSchool`, `SchoolDraft`, `SchoolId`: the register's records.
//! - `LocationQuery`: reference location parsed from request parameters.
//! - `RankedSchool`, `rank_schools`: distance-ordered results.
//! - `SchoolsService`: implementation of the driving ports.
//! - `Error`, `ErrorCode`, `TraceId`: cross-cutting failure and correlation.

pub mod error;
pub mod ports;
pub mod schools;
mod schools_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::schools::{
    LocationQuery, LocationQueryError, NewSchool, RankedSchool, School, SchoolDraft, SchoolId,
    SchoolValidationError, SchoolValidationErrors, rank_schools,
};
pub use self::schools_service::SchoolsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for use-case code.
pub type ApiResult<T> = Result<T, Error>;
