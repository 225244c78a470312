//! Optional file logging for the `argrouter` binary.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_ENV_VAR: &str = "ARGROUTER_LOG";

/// Filter used when `RUST_LOG` is unset: this crate's events only.
pub const DEFAULT_FILTER: &str = "argrouter=info";

/// Log file for one run: `{base}.{unix_seconds}.{pid}`.
///
/// Returns `None` when `base` is empty. A clock before the epoch yields 0.
pub fn unique_log_path(base: OsString, now: SystemTime, pid: u32) -> Option<PathBuf> {
    if base.is_empty() {
        return None;
    }

    let timestamp = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut path = base;
    path.push(format!(".{}.{}", timestamp, pid));
    Some(PathBuf::from(path))
}

/// Initialize tracing to a file when `ARGROUTER_LOG` is set.
///
/// Routing output goes to stdout, so nothing is logged there.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR)
        .and_then(|base| unique_log_path(base, SystemTime::now(), std::process::id()))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
