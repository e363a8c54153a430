//! Reading and writing `config.toml`
//!
//! Loading is lenient about values (out-of-range settings are reported, not
//! refused) and strict about syntax. Saving is strict about both and goes
//! through a temp file in the target directory, so a crash mid-write leaves
//! the previous file intact.

use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use log::{debug, info, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct ConfigPersistence {
    path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; empty or malformed files are errors
    pub fn load(&self) -> ConfigResult<Config> {
        let Some(text) = self.read()? else {
            info!("No config at {}, using defaults", self.path.display());
            return Ok(Config::default());
        };

        let config = self.parse(&text)?;
        if let Err(errors) = config.validate() {
            for error in &errors {
                warn!("{}: {}", self.path.display(), error);
            }
        }
        Ok(config)
    }

    /// Refuses invalid configs; nothing is written in that case
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;

        let text = config.to_toml_string()?;
        self.write_atomically(&text)?;

        info!("Config saved to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> ConfigResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn parse(&self, text: &str) -> ConfigResult<Config> {
        if text.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.path.clone(),
            });
        }

        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if config.version > CONFIG_VERSION {
            warn!(
                "{} has format version {}, newer than {}; reading it anyway",
                self.path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    fn write_atomically(&self, text: &str) -> ConfigResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
            debug!("Created config directory {}", dir.display());
        }

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(text.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}
