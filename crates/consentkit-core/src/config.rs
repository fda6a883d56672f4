//! Consent form configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::category::CategoryNode;
use crate::error::{Error, Result};

/// Translation domain handed to the host's localization layer unless
/// overridden in configuration.
pub const DEFAULT_TRANSLATION_DOMAIN: &str = "cookie_consent";

/// Environment variable pointing at a JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "CONSENT_CONFIG_PATH";

/// Configuration for the consent form.
///
/// Categories may nest arbitrarily; nesting only groups related categories
/// for the operator and is discarded when the form is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentConfig {
    /// Cookie categories offered for per-category consent.
    #[serde(default = "ConsentConfig::default_categories")]
    pub categories: Vec<CategoryNode>,
    /// Offer only the accept-all / functional-only actions.
    #[serde(default)]
    pub simplified: bool,
    /// Translation domain for form labels.
    #[serde(default = "default_translation_domain")]
    pub translation_domain: String,
}

fn default_translation_domain() -> String {
    DEFAULT_TRANSLATION_DOMAIN.to_string()
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            categories: Self::default_categories(),
            simplified: false,
            translation_domain: default_translation_domain(),
        }
    }
}

impl ConsentConfig {
    /// Categories shipped by default when none are configured.
    pub fn default_categories() -> Vec<CategoryNode> {
        ["analytics", "tracking", "marketing", "social_media"]
            .into_iter()
            .map(CategoryNode::leaf)
            .collect()
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        info!("Loaded consent configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration from the environment.
    ///
    /// Reads the file named by `CONSENT_CONFIG_PATH`; when the variable is
    /// unset the built-in defaults are used.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if path.is_empty() => {
                Err(Error::Config(format!("{} is set but empty", CONFIG_PATH_ENV)))
            }
            Ok(path) => Self::load(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::flatten;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: ConsentConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.simplified);
        assert_eq!(config.translation_domain, DEFAULT_TRANSLATION_DOMAIN);
        assert_eq!(
            flatten(&config.categories),
            vec!["analytics", "tracking", "marketing", "social_media"]
        );
    }

    #[test]
    fn test_nested_categories_parse() {
        let config: ConsentConfig = serde_json::from_str(
            r#"{"categories": ["ads", ["stats", ["heatmaps"]]], "simplified": true}"#,
        )
        .unwrap();
        assert!(config.simplified);
        assert_eq!(flatten(&config.categories), vec!["ads", "stats", "heatmaps"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": ["ads", ["stats", "heatmaps"]], "translation_domain": "shop_consent"}}"#
        )
        .unwrap();

        let config = ConsentConfig::load(file.path()).unwrap();
        assert_eq!(flatten(&config.categories), vec!["ads", "stats", "heatmaps"]);
        assert_eq!(config.translation_domain, "shop_consent");
        assert!(!config.simplified);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ConsentConfig::load("/nonexistent/consent.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_malformed_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ConsentConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
