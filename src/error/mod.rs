//! Error types for cardsort.
//!
//! Library code returns [`Result<T>`] with a [`CardsortError`]. The binary
//! converts these into `color_eyre` reports at the edge.
//!
//! | Variant | Source | Recoverable |
//! |---------|--------|-------------|
//! | Io | reading card or catalog files | No |
//! | Json | malformed card or catalog files | No |
//! | Config | bad CLI flags or env values | No |
//! | UnknownSortKey | `--sort` names a key that does not exist | No |
//! | Terminal | terminal setup/draw failures | No |
//! | Channel | app message channel closed | Yes |

use std::path::PathBuf;

use thiserror::Error;

use crate::sort::SortError;

/// Unified error type.
#[derive(Debug, Error)]
pub enum CardsortError {
    /// Failed to read a file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents were not valid JSON for the expected shape
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration for {field}: {message}")]
    Config { field: String, message: String },

    /// A sort key identifier did not parse
    #[error(transparent)]
    UnknownSortKey(#[from] SortError),

    /// Terminal I/O failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// The app message channel is gone
    #[error("Message channel closed")]
    Channel,
}

impl CardsortError {
    /// Create a configuration error.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        CardsortError::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if the UI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CardsortError::Channel)
    }

    /// Short, user-facing description.
    pub fn user_message(&self) -> String {
        match self {
            CardsortError::Io { path, .. } => {
                format!("Could not read {}. Check the path and permissions.", path.display())
            }
            CardsortError::Json(_) => "The file is not valid JSON for this command.".to_string(),
            CardsortError::Config { field, message } => format!("{}: {}", field, message),
            CardsortError::UnknownSortKey(err) => format!(
                "{}. Valid keys: {}",
                err,
                crate::sort::SortKey::ALL
                    .iter()
                    .map(|key| key.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            CardsortError::Terminal(_) => {
                "The terminal could not be set up. Try a different terminal.".to_string()
            }
            CardsortError::Channel => "Internal communication error.".to_string(),
        }
    }
}

/// Result alias for cardsort operations.
pub type Result<T> = std::result::Result<T, CardsortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = CardsortError::Io {
            path: PathBuf::from("/tmp/cards.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/cards.json"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CardsortError = json_err.into();
        assert!(matches!(err, CardsortError::Json(_)));
    }

    #[test]
    fn test_sort_error_conversion() {
        let err: CardsortError = SortError::UnknownKey("rarity".to_string()).into();
        assert_eq!(err.to_string(), "Unknown sort key: rarity");
        assert!(err.user_message().contains("encounter_set"));
    }

    #[test]
    fn test_config_error() {
        let err = CardsortError::config("--sort", "missing value");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for --sort: missing value"
        );
        assert_eq!(err.user_message(), "--sort: missing value");
    }

    #[test]
    fn test_recoverability() {
        assert!(CardsortError::Channel.is_recoverable());
        assert!(!CardsortError::config("x", "y").is_recoverable());
        assert!(!CardsortError::Terminal(std::io::Error::other("tty")).is_recoverable());
    }
}
