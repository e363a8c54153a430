//! Error types for the configuration system

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but holds nothing but whitespace
    #[error("Config file {path} is empty")]
    Empty { path: PathBuf },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No home directory to put the config under
    #[error("No user config directory available on this system")]
    NoConfigDir,

    /// Rejected before writing; carries every problem found
    #[error("Invalid config: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// True when the file is present but unusable, so defaults are a sane fallback
    pub fn is_corrupt_file(&self) -> bool {
        matches!(self, ConfigError::Empty { .. } | ConfigError::Parse { .. })
    }
}

fn join_problems(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// What is wrong with a single value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    OutOfRange {
        value: String,
        min: String,
        max: String,
    },
    /// Must be strictly below the named sibling field
    NotBelow { value: String, limit_field: String },
    Blank,
    NoEntries,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::OutOfRange { value, min, max } => {
                write!(f, "{} is outside {}..={}", value, min, max)
            }
            Problem::NotBelow { value, limit_field } => {
                write!(f, "{} must be below {}", value, limit_field)
            }
            Problem::Blank => write!(f, "must not be blank"),
            Problem::NoEntries => write!(f, "must list at least one entry"),
        }
    }
}

/// A problem tied to its dotted field path, e.g. `carousel.step`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {problem}")]
pub struct ValidationError {
    pub field: String,
    pub problem: Problem,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, problem: Problem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(
            "carousel.small_page_size",
            Problem::OutOfRange {
                value: "0".to_string(),
                min: "1".to_string(),
                max: "100".to_string(),
            },
        );
        assert_eq!(err.to_string(), "carousel.small_page_size: 0 is outside 1..=100");
    }

    #[test]
    fn test_invalid_lists_every_problem() {
        let err = ConfigError::Invalid(vec![
            ValidationError::new("library.default_author", Problem::Blank),
            ValidationError::new("library.supported_extensions", Problem::NoEntries),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid config: library.default_author: must not be blank; \
             library.supported_extensions: must list at least one entry"
        );
    }

    #[test]
    fn test_corrupt_file_classification() {
        let empty = ConfigError::Empty {
            path: PathBuf::from("config.toml"),
        };
        assert!(empty.is_corrupt_file());
        assert!(!ConfigError::NoConfigDir.is_corrupt_file());
    }
}
