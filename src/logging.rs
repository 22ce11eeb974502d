//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so log output goes to a file. The filter comes from
//! `CARDSORT_LOG` (e.g. `CARDSORT_LOG=cardsort=debug`) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ENV_LOG_FILTER};
use crate::error::{CardsortError, Result};

const DEFAULT_FILTER: &str = "info";

/// Build the env filter, falling back to `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns false when logging is disabled in the config or a subscriber is
/// already installed.
pub fn init_logging(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("cardsort {} logging to {}", crate::cli::VERSION, path.display());
    }
    Ok(installed)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CardsortError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CardsortError::Io {
            path: path.to_path_buf(),
            source,
        })
}
