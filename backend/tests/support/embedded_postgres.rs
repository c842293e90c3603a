//! Database provisioning on the embedded cluster.
//!
//! Each test gets its own database cloned from a template that already has
//! the embedded migrations applied. The template name carries a hash of the
//! `migrations/` directory so a schema change provisions a fresh template.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use school_locator::domain::ports::SchoolRepositoryError;
use school_locator::outbound::persistence::MIGRATIONS;
use uuid::Uuid;

use super::format_postgres_error;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "schools_template";
const TEMPLATE_PROVISION_RETRIES: usize = 5;
const TEMPLATE_PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, SchoolRepositoryError> {
    let hash = hash_directory(migrations_dir())
        .map_err(|err| SchoolRepositoryError::query(format!("hash migrations: {err}")))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

fn new_test_database_name() -> String {
    format!("test_{}", Uuid::new_v4())
}

fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, SchoolRepositoryError> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| SchoolRepositoryError::query(format!("template check: {err:?}")))?;

    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| SchoolRepositoryError::query(format!("create template: {err:?}")))?;

        let url = cluster.connection().database_url(&template_name);
        migrate_schema(&url)?;
    }

    Ok(template_name)
}

fn provision_template_database_attempt(
    cluster: &ClusterHandle,
    attempt: usize,
) -> Result<TemporaryDatabase, SchoolRepositoryError> {
    let template_name = ensure_template_database(cluster).map_err(|error| {
        SchoolRepositoryError::query(format!(
            "template check: attempt {attempt}/{TEMPLATE_PROVISION_RETRIES}: {error}"
        ))
    })?;
    cluster
        .temporary_database_from_template(new_test_database_name().as_str(), template_name.as_str())
        .map_err(|error| {
            SchoolRepositoryError::query(format!(
                "create database from template: attempt {attempt}/{TEMPLATE_PROVISION_RETRIES}: {error:?}"
            ))
        })
}

/// Provisions a migrated temporary database cloned from the template.
pub fn provision_template_database(
    cluster: &ClusterHandle,
) -> Result<TemporaryDatabase, SchoolRepositoryError> {
    let mut last_error = None;
    for attempt in 1..=TEMPLATE_PROVISION_RETRIES {
        match provision_template_database_attempt(cluster, attempt) {
            Ok(database) => return Ok(database),
            Err(error) => last_error = Some(error),
        }
        if attempt < TEMPLATE_PROVISION_RETRIES {
            std::thread::sleep(TEMPLATE_PROVISION_RETRY_DELAY);
        }
    }

    Err(last_error.unwrap_or_else(|| {
        SchoolRepositoryError::query("create database from template: exhausted retries")
    }))
}

/// Provisions an empty temporary database with no migrations applied.
pub fn provision_empty_database(
    cluster: &ClusterHandle,
) -> Result<TemporaryDatabase, SchoolRepositoryError> {
    cluster
        .temporary_database(new_test_database_name().as_str())
        .map_err(|err| SchoolRepositoryError::query(format!("create database: {err:?}")))
}

/// Applies every pending embedded migration over a blocking connection.
pub fn migrate_schema(url: &str) -> Result<(), SchoolRepositoryError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| SchoolRepositoryError::connection(format!("{err:?}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchoolRepositoryError::query(format!("migration: {err:?}")))?;
    Ok(())
}

/// Runs raw SQL outside Diesel, bypassing domain validation.
pub fn execute_raw(url: &str, sql: &str) -> Result<u64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .execute(sql, &[])
        .map_err(|err| format_postgres_error(&err))
}
