//! Log file setup.
//!
//! The terminal belongs to the sketches, so log lines go to a file in the
//! platform cache directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vignette_config::Config;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "VIGNETTE_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Filter from the given directives, falling back to `info` when they are
/// missing or malformed.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber and return the log file path.
///
/// Returns `None` when the log file cannot be opened; logging is then
/// disabled for the session.
pub fn init() -> Option<PathBuf> {
    let dirs = Config::project_dirs()?;
    let dir = dirs.cache_dir();
    fs::create_dir_all(dir).ok()?;

    let path = dir.join("vignette.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(build_filter(directives.as_deref()))
        .try_init()
        .ok()?;

    Some(path)
}
