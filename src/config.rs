//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: defaults, environment
//! variables ([`AppConfig::from_env`]), then command-line flags
//! ([`crate::cli::RunOptions::apply`]).

use std::path::PathBuf;
use std::time::Duration;

use crate::sort::SortKey;

/// Env var naming a JSON card file.
pub const ENV_CARDS: &str = "CARDSORT_CARDS";
/// Env var naming a JSON message catalog.
pub const ENV_CATALOG: &str = "CARDSORT_CATALOG";
/// Env var naming the log file.
pub const ENV_LOG_FILE: &str = "CARDSORT_LOG_FILE";
/// Env var holding the tracing filter directive.
pub const ENV_LOG_FILTER: &str = "CARDSORT_LOG";

/// Configuration for a TUI session.
///
/// # Example
///
/// ```
/// use cardsort::config::AppConfig;
/// use cardsort::sort::SortKey;
///
/// let config = AppConfig::default()
///     .with_sort_order(vec![SortKey::Cost, SortKey::Type])
///     .with_encounter_override(Some(true));
/// assert_eq!(config.sort_order.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON card file; None uses the built-in sample
    pub cards_path: Option<PathBuf>,
    /// JSON message catalog; None uses English templates
    pub catalog_path: Option<PathBuf>,
    /// Initial selected sort order
    pub sort_order: Vec<SortKey>,
    /// Force encounter-set sorting on or off; None derives it from the cards
    pub encounter_override: Option<bool>,
    /// Where tracing output goes; None disables logging
    pub log_file: Option<PathBuf>,
    /// How often the event loop wakes without input
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cards_path: None,
            catalog_path: None,
            sort_order: vec![SortKey::Type, SortKey::Cost],
            encounter_override: None,
            log_file: default_log_file(),
            tick_rate: Duration::from_millis(250),
        }
    }
}

/// `<cache dir>/cardsort/cardsort.log`, when a cache dir exists.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("cardsort").join("cardsort.log"))
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cards_path = Some(path.into());
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_sort_order(mut self, order: Vec<SortKey>) -> Self {
        self.sort_order = order;
        self
    }

    pub fn with_encounter_override(mut self, value: Option<bool>) -> Self {
        self.encounter_override = value;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Defaults overlaid with `CARDSORT_*` environment variables.
    ///
    /// Empty values are ignored. `CARDSORT_LOG_FILE=off` disables logging.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env_value(ENV_CARDS) {
            config.cards_path = Some(PathBuf::from(path));
        }
        if let Some(path) = env_value(ENV_CATALOG) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config.log_file = if path.eq_ignore_ascii_case("off") {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        config
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
