//! Folder ingestion configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Which entries count as books and how they are labelled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    /// Accepted book file extensions, matched case-insensitively
    pub supported_extensions: Vec<String>,

    /// Author recorded when ingestion cannot determine one
    pub default_author: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            supported_extensions: vec!["pdf".to_string(), "epub".to_string()],
            default_author: "Unknown".to_string(),
        }
    }
}

impl ConfigSection for LibraryConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::for_section(self)
            .non_empty_list("supported_extensions", &self.supported_extensions)
            .not_blank("default_author", &self.default_author)
            .finish()
    }

    fn merge(&mut self, other: Self) {
        self.supported_extensions = other.supported_extensions;
        self.default_author = other.default_author;
    }

    fn section_name(&self) -> &'static str {
        "library"
    }
}
