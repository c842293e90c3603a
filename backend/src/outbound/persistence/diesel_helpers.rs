//! Error mapping shared by Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::SchoolRepositoryError;

use super::pool::PoolError;

/// Pool failures mean no connection was available.
pub(crate) fn map_pool_error(error: PoolError) -> SchoolRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SchoolRepositoryError::connection(message)
        }
    }
}

/// Translate a Diesel error, logging the driver detail at debug level.
pub(crate) fn map_diesel_error(error: DieselError, operation: &str) -> SchoolRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            SchoolRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            SchoolRepositoryError::query("record violates a table constraint")
        }
        DieselError::NotFound => SchoolRepositoryError::query("record not found"),
        _ => SchoolRepositoryError::query(format!("{operation} failed")),
    }
}
