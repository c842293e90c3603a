//! Embedded schema migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    #[error("migration task did not complete: {message}")]
    Join { message: String },
}

/// Apply pending migrations, returning how many ran.
///
/// Diesel's migration harness is synchronous, so the work runs on Tokio's
/// blocking pool with its own short-lived connection.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url).map_err(|err| MigrationError::Connect {
            message: err.to_string(),
        })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError::Join {
        message: err.to_string(),
    })??;

    info!(applied, "database migrations complete");
    Ok(applied)
}
