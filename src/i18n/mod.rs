//! Display string lookup.
//!
//! Every human-readable string in the UI goes through a [`Translator`].
//! Templates are the English source strings; a [`MessageCatalog`] maps them to
//! a translated form and falls back to the template when no entry exists.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CardsortError, Result};

/// Pure, total string lookup.
pub trait Translator {
    /// Translate a template. Must never fail; unknown templates come back as-is.
    fn translate(&self, template: &str) -> String;
}

/// Returns every template unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, template: &str) -> String {
        template.to_string()
    }
}

/// On-disk shape of a message catalog file.
///
/// ```json
/// { "locale": "de", "messages": { "Sort by": "Sortieren nach" } }
/// ```
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    locale: Option<String>,
    messages: HashMap<String, String>,
}

/// Template → translation map loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: Option<String>,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog (behaves like [`IdentityTranslator`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self {
            locale: file.locale,
            messages: file.messages,
        })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CardsortError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded message catalog {} (locale {}, {} entries)",
            path.display(),
            catalog.locale().unwrap_or("unset"),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Add or replace a single entry.
    pub fn with_message(mut self, template: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(template.into(), translation.into());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, template: &str) -> String {
        match self.messages.get(template) {
            Some(translated) if !translated.is_empty() => translated.clone(),
            _ => template.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_identity_translator_returns_template() {
        assert_eq!(IdentityTranslator.translate("Sort by"), "Sort by");
        assert_eq!(IdentityTranslator.translate(""), "");
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "locale": "de",
            "messages": {
                "Sort by": "Sortieren nach",
                "Other": "Andere"
            }
        }"#;

        let catalog = MessageCatalog::from_json(json).expect("catalog should parse");

        assert_eq!(catalog.locale(), Some("de"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.translate("Sort by"), "Sortieren nach");
        assert_eq!(catalog.translate("Other"), "Andere");
    }

    #[test]
    fn test_catalog_falls_back_to_template() {
        let catalog = MessageCatalog::new().with_message("Cost", "Kosten");

        assert_eq!(catalog.translate("Cost"), "Kosten");
        assert_eq!(catalog.translate("Pack"), "Pack");
    }

    #[test]
    fn test_catalog_empty_translation_falls_back() {
        let catalog = MessageCatalog::new().with_message("Title", "");
        assert_eq!(catalog.translate("Title"), "Title");
    }

    #[test]
    fn test_catalog_locale_is_optional() {
        let catalog = MessageCatalog::from_json(r#"{"messages": {}}"#).unwrap();
        assert!(catalog.locale().is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_catalog_invalid_json_is_error() {
        let result = MessageCatalog::from_json("not json");
        assert!(matches!(result, Err(CardsortError::Json(_))));
    }

    #[test]
    fn test_catalog_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"messages": {{"Other": "Autre"}}}}"#).unwrap();

        let catalog = MessageCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.translate("Other"), "Autre");
    }

    #[test]
    fn test_catalog_load_missing_file() {
        let result = MessageCatalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CardsortError::Io { .. })));
    }
}
