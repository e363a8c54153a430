//! Locating, loading and saving the readshelf config

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult, LogLevel, NavigationKind};
use directories::ProjectDirs;
use log::{info, warn};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "READSHELF";

/// Owns one config directory and the `config.toml` inside it
///
/// Relative paths found in the config (such as the quote cache file) are
/// anchored to the same directory through [`ConfigManager::resolve`].
pub struct ConfigManager {
    dir: PathBuf,
    file: ConfigPersistence,
}

impl ConfigManager {
    /// Uses the platform config directory for `readshelf`
    /// (`~/.config/readshelf` on Linux)
    pub fn new() -> ConfigResult<Self> {
        let dirs = ProjectDirs::from("", "", "readshelf").ok_or(ConfigError::NoConfigDir)?;
        Self::with_directory(dirs.config_dir().to_path_buf())
    }

    pub fn with_directory(dir: PathBuf) -> ConfigResult<Self> {
        let file = ConfigPersistence::new(dir.join(CONFIG_FILE_NAME));
        Ok(Self { dir, file })
    }

    pub fn config_dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Absolute paths pass through; relative ones land in the config directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.dir.join(path)
    }

    pub fn load(&self) -> ConfigResult<Config> {
        self.file.load()
    }

    /// Never fails; problems are logged and defaults returned
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|e| {
            if e.is_corrupt_file() {
                warn!("{}; using defaults until the file is fixed", e);
            } else {
                warn!("Could not load config ({}); using defaults", e);
            }
            Config::default()
        })
    }

    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.file.save(config)
    }

    /// Read-modify-write of the stored config
    ///
    /// ```rust,no_run
    /// # use readshelf_config::{ConfigManager, NavigationKind};
    /// # let manager = ConfigManager::new().unwrap();
    /// manager
    ///     .update(|config| config.carousel.navigation = NavigationKind::Stepped)
    ///     .unwrap();
    /// ```
    pub fn update(&self, edit: impl FnOnce(&mut Config)) -> ConfigResult<()> {
        let mut config = self.load()?;
        edit(&mut config);
        self.save(&config)
    }

    /// Writes the defaults unless a file is already there; `true` when written
    pub fn initialize(&self) -> ConfigResult<bool> {
        let path = self.config_path();
        if path.exists() {
            info!("Keeping existing config at {}", path.display());
            return Ok(false);
        }
        self.save(&Config::default())?;
        info!("Wrote default config to {}", path.display());
        Ok(true)
    }

    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Problems in the stored config as `section.field: message` lines
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let problems = self.load()?.validate().err().unwrap_or_default();
        Ok(problems.iter().map(ToString::to_string).collect())
    }

    /// [`load`](Self::load) followed by `READSHELF_<SECTION>_<FIELD>` overrides,
    /// e.g. `READSHELF_CAROUSEL_LARGE_PAGE_SIZE=8`
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Err(problems) = config.validate() {
            for problem in &problems {
                warn!("After environment overrides: {}", problem);
            }
        }
        Ok(config)
    }
}

fn env_key(section: &str, field: &str) -> String {
    format!("{}_{}_{}", ENV_PREFIX, section, field).to_ascii_uppercase()
}

/// Unparsable values are logged and skipped
fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let var = |section: &str, field: &str| lookup(&env_key(section, field));

    if let Some(level) = var("app", "log_level") {
        match level.parse::<LogLevel>() {
            Ok(level) => config.app.log_level = level,
            Err(e) => warn!("Ignoring {}: {}", env_key("app", "log_level"), e),
        }
    }

    if let Some(author) = var("library", "default_author") {
        config.library.default_author = author;
    }
    if let Some(list) = var("library", "supported_extensions") {
        config.library.supported_extensions = list
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(String::from)
            .collect();
    }

    let carousel = &mut config.carousel;
    for (field, slot) in [
        ("small_page_size", &mut carousel.small_page_size),
        ("medium_page_size", &mut carousel.medium_page_size),
        ("large_page_size", &mut carousel.large_page_size),
        ("step", &mut carousel.step),
    ] {
        if let Some(value) = var("carousel", field) {
            match value.trim().parse::<usize>() {
                Ok(n) => *slot = n,
                Err(_) => warn!("Ignoring {}='{}'", env_key("carousel", field), value),
            }
        }
    }

    for (field, slot) in [
        ("medium_min_width", &mut carousel.medium_min_width),
        ("large_min_width", &mut carousel.large_min_width),
    ] {
        if let Some(value) = var("carousel", field) {
            match value.trim().parse::<u32>() {
                Ok(width) => *slot = width,
                Err(_) => warn!("Ignoring {}='{}'", env_key("carousel", field), value),
            }
        }
    }

    if let Some(nav) = var("carousel", "navigation") {
        match nav.trim().to_ascii_lowercase().as_str() {
            "paged" => carousel.navigation = NavigationKind::Paged,
            "stepped" => carousel.navigation = NavigationKind::Stepped,
            other => warn!("Ignoring {}='{}'", env_key("carousel", "navigation"), other),
        }
    }

    if let Some(file) = var("quotes", "cache_file") {
        config.quotes.cache_file = PathBuf::from(file);
    }
    if let Some(text) = var("quotes", "fallback_text") {
        config.quotes.fallback_text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn manager_in_tempdir() -> (TempDir, ConfigManager) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(dir.path().to_path_buf()).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_no_file_means_defaults() {
        let (_dir, manager) = manager_in_tempdir();
        assert_eq!(manager.load_or_default(), Config::default());
    }

    #[test]
    fn test_update_persists_the_edit() {
        let (_dir, manager) = manager_in_tempdir();
        manager
            .update(|config| config.carousel.medium_page_size = 3)
            .unwrap();
        assert_eq!(manager.load().unwrap().carousel.medium_page_size, 3);
    }

    #[test]
    fn test_initialize_keeps_existing_file() {
        let (_dir, manager) = manager_in_tempdir();
        assert!(manager.initialize().unwrap());
        manager
            .update(|config| config.library.default_author = "Anonymous".into())
            .unwrap();

        assert!(!manager.initialize().unwrap());
        assert_eq!(manager.load().unwrap().library.default_author, "Anonymous");

        manager.reset().unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_validate_lists_field_paths() {
        let (_dir, manager) = manager_in_tempdir();
        std::fs::write(manager.config_path(), "[carousel]\nstep = 0\n").unwrap();

        let problems = manager.validate().unwrap();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("carousel.step"));
    }

    #[test]
    fn test_resolve() {
        let (dir, manager) = manager_in_tempdir();
        assert_eq!(
            manager.resolve(Path::new("quotes.json")),
            dir.path().join("quotes.json")
        );
        let absolute = dir.path().join("elsewhere.json");
        assert_eq!(manager.resolve(&absolute), absolute);
    }

    #[test]
    fn test_env_key_shape() {
        assert_eq!(
            env_key("carousel", "large_page_size"),
            "READSHELF_CAROUSEL_LARGE_PAGE_SIZE"
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("READSHELF_CAROUSEL_LARGE_PAGE_SIZE", "8"),
            ("READSHELF_CAROUSEL_NAVIGATION", "Stepped"),
            ("READSHELF_LIBRARY_SUPPORTED_EXTENSIONS", "pdf, mobi,"),
            ("READSHELF_APP_LOG_LEVEL", "debug"),
            ("READSHELF_CAROUSEL_STEP", "not-a-number"),
        ]);

        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.carousel.large_page_size, 8);
        assert_eq!(config.carousel.navigation, NavigationKind::Stepped);
        assert_eq!(config.library.supported_extensions, vec!["pdf", "mobi"]);
        assert_eq!(config.app.log_level, LogLevel::Debug);
        assert_eq!(config.carousel.step, 5);
    }

    #[test]
    fn test_env_overrides_breakpoints_and_quotes() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("READSHELF_CAROUSEL_MEDIUM_MIN_WIDTH", "500"),
            ("READSHELF_CAROUSEL_LARGE_MIN_WIDTH", "wide"),
            ("READSHELF_QUOTES_CACHE_FILE", "/tmp/daily.json"),
            ("READSHELF_QUOTES_FALLBACK_TEXT", "No quote today"),
        ]);

        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.carousel.medium_min_width, 500);
        assert_eq!(config.carousel.large_min_width, 1024);
        assert_eq!(config.quotes.cache_file, PathBuf::from("/tmp/daily.json"));
        assert_eq!(config.quotes.fallback_text, "No quote today");
    }
}
