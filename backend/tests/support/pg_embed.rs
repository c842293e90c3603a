//! Bootstraps the embedded PostgreSQL cluster shared by integration tests.
//!
//! `pg-embed-setup-unpriv` installs binaries and data under `/var/tmp` by
//! default. When `PG_RUNTIME_DIR` or `PG_DATA_DIR` is missing, both are
//! pointed at a unique directory below the cargo target directory for the
//! duration of the bootstrap. Environment mutation is serialised through
//! `env_lock`.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::ClusterHandle;
use uuid::Uuid;

static PG_EMBED_BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Maximum number of retries for transient download or startup errors.
const MAX_RETRIES: u32 = 3;

/// Base delay between retries; doubles on every attempt.
const RETRY_DELAY_MS: u64 = 500;

fn pg_embed_target_dir() -> PathBuf {
    if let Some(target_dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(target_dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn create_unique_pg_embed_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let unique = format!("bootstrap-{}-{}", std::process::id(), Uuid::new_v4());
    let base = pg_embed_target_dir().join(unique);
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");

    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    Ok((runtime_dir, data_dir))
}

fn is_transient_error(err: &str) -> bool {
    let transient_patterns = [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timeout",
        "timed out",
        "temporarily unavailable",
        "network unreachable",
        "dns error",
        "failed to lookup",
    ];

    let err_lower = err.to_lowercase();
    transient_patterns
        .iter()
        .any(|pattern| err_lower.contains(pattern))
}

/// Returns the process-wide cluster handle, starting PostgreSQL on first use.
///
/// Retries up to [`MAX_RETRIES`] times when the failure looks like a
/// transient network problem while fetching PostgreSQL binaries.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let _bootstrap_guard = PG_EMBED_BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();

    let _env_guard = if needs_override {
        let (runtime_dir, data_dir) =
            create_unique_pg_embed_dirs().map_err(|err| err.to_string())?;

        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt < MAX_RETRIES && is_transient_error(&last_error) {
                    let delay = Duration::from_millis(RETRY_DELAY_MS * (1 << attempt));
                    eprintln!(
                        "pg-embed: transient error on attempt {}/{}, retrying in {delay:?}: {last_error}",
                        attempt + 1,
                        MAX_RETRIES + 1,
                    );
                    std::thread::sleep(delay);
                } else {
                    break;
                }
            }
        }
    }

    Err(last_error)
}
