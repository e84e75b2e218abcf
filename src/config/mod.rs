//! Trail configuration management for `trail.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[base]`   | Site root the Home crumb links to                |
//! | `[trail]`  | Crumb titles (home, posts page, 404, search)     |
//! | `[markup]` | Rendered element tags, classes, separator glyph  |
//! | `[extra]`  | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.com/"
//!
//! [trail]
//! home_title = "Start"
//! search_prefix = "You searched for:"
//!
//! [markup]
//! container_class = "site-breadcrumbs"
//! separator = "→"
//! ```
//!
//! Merging semantics: caller-supplied values override defaults, unspecified
//! keys keep their defaults, unknown keys are silently ignored. Parsing a
//! config therefore never fails except on unreadable files or invalid TOML.

mod base;
pub mod defaults;
mod error;
mod markup;
mod trail;

pub use error::ConfigError;

use base::BaseConfig;
use markup::MarkupConfig;
use trail::TrailTitles;

use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing trail.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct TrailConfig {
    /// Site-level settings
    #[serde(default)]
    pub base: BaseConfig,

    /// Crumb title settings
    #[serde(default)]
    pub trail: TrailTitles,

    /// Markup rendering settings
    #[serde(default)]
    pub markup: MarkupConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl TrailConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TrailConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = TrailConfig::from_str("").unwrap();

        assert_eq!(config.base.url, "/");
        assert_eq!(config.trail.home_title, "Home");
        assert_eq!(config.trail.posts_title, "Blog");
        assert_eq!(config.trail.not_found_title, "404 Not Found");
        assert_eq!(config.trail.search_prefix, "Search results for:");
        assert_eq!(config.markup.container_tag, "nav");
        assert_eq!(config.markup.container_class, "breadcrumbs");
        assert_eq!(config.markup.list_tag, "ol");
        assert_eq!(config.markup.list_class, "breadcrumbs-list");
        assert_eq!(config.markup.item_tag, "li");
        assert_eq!(config.markup.separator, "/");
    }

    #[test]
    fn test_default_impl_matches_empty_toml() {
        let parsed = TrailConfig::from_str("").unwrap();
        let built = TrailConfig::default();

        assert_eq!(parsed.base.url, built.base.url);
        assert_eq!(parsed.trail.home_title, built.trail.home_title);
        assert_eq!(parsed.markup.separator, built.markup.separator);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = TrailConfig::from_str(
            r#"
            [trail]
            home_title = "Start"

            [markup]
            separator = "→"
        "#,
        )
        .unwrap();

        assert_eq!(config.trail.home_title, "Start");
        assert_eq!(config.markup.separator, "→");
        // Untouched keys keep defaults
        assert_eq!(config.trail.not_found_title, "404 Not Found");
        assert_eq!(config.markup.container_tag, "nav");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = TrailConfig::from_str(
            r#"
            [trail]
            home_title = "Start"
            no_such_option = true

            [unknown_section]
            field = "value"
        "#,
        );

        let config = config.unwrap();
        assert_eq!(config.trail.home_title, "Start");
    }

    #[test]
    fn test_extra_fields() {
        let config = TrailConfig::from_str(
            r#"
            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = TrailConfig::from_str(
            r#"
            [trail
            home_title = "Start"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [base]
            url = "https://example.com/"
        "#
        )
        .unwrap();

        let config = TrailConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base.url, "https://example.com/");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TrailConfig::from_path(Path::new("/no/such/trail.toml"));
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("/no/such/trail.toml"));
    }
}
