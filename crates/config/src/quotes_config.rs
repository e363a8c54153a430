//! Quote-of-the-day cache configuration section

use crate::validation::{ConfigSection, Problem, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuotesConfig {
    /// Cache file (relative to the config dir if not absolute)
    pub cache_file: PathBuf,

    /// Text shown when no quote could be fetched
    pub fallback_text: String,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            cache_file: PathBuf::from("quotes.json"),
            fallback_text: "Failed to load quote. Try again!".to_string(),
        }
    }
}

impl ConfigSection for QuotesConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::for_section(self)
            .check(
                "cache_file",
                !self.cache_file.as_os_str().is_empty(),
                Problem::Blank,
            )
            .not_blank("fallback_text", &self.fallback_text)
            .finish()
    }

    fn merge(&mut self, other: Self) {
        self.cache_file = other.cache_file;
        self.fallback_text = other.fallback_text;
    }

    fn section_name(&self) -> &'static str {
        "quotes"
    }
}
