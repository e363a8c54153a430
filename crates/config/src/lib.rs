//! Readshelf Configuration System
//!
//! TOML-backed settings for ingestion, carousels and the quote cache.
//! Each section implements `ConfigSection` so it can validate and merge
//! itself; the root `Config` just fans out to its sections.
//!
//! - **Graceful degradation**: invalid files fall back to defaults with warnings
//! - **Atomic writes**: config files are never left half-written
//!
//! # Example
//!
//! ```rust,no_run
//! use readshelf_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load_or_default();
//!
//! println!("Large page size: {}", config.carousel.large_page_size);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod carousel_config;
mod library_config;
mod quotes_config;

pub use error::{ConfigError, ConfigResult, Problem, ValidationError};
pub use manager::ConfigManager;
pub use persistence::ConfigPersistence;
pub use validation::{ConfigSection, Validator};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use carousel_config::{CarouselConfig, NavigationKind};
pub use library_config::LibraryConfig;
pub use quotes_config::QuotesConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Folder ingestion settings
    pub library: LibraryConfig,

    /// Carousel breakpoints and page sizes
    pub carousel: CarouselConfig,

    /// Quote-of-the-day cache
    pub quotes: QuotesConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every section, returning all problems found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            self.app.validate(),
            self.library.validate(),
            self.carousel.validate(),
            self.quotes.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.library.merge(other.library);
        self.carousel.merge(other.carousel);
        self.quotes.merge(other.quotes);
    }

    /// Renders the config as it would be written to disk
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            library: LibraryConfig::default(),
            carousel: CarouselConfig::default(),
            quotes: QuotesConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_version_is_set() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        let mut override_config = Config::default();
        override_config.carousel.large_page_size = 8;

        base.merge(override_config);
        assert_eq!(base.carousel.large_page_size, 8);
    }

    #[test]
    fn test_validate_collects_errors_across_sections() {
        let mut config = Config::default();
        config.library.default_author = String::new();
        config.carousel.small_page_size = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[carousel]\nlarge_page_size = 6\n").unwrap();
        assert_eq!(config.carousel.large_page_size, 6);
        assert_eq!(config.carousel.small_page_size, 2);
        assert_eq!(config.library, LibraryConfig::default());
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_to_toml_string_reparses() {
        let mut config = Config::default();
        config.carousel.navigation = NavigationKind::Stepped;

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("navigation = \"stepped\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
