// FILE: crates/library/src/filter.rs

use crate::provider::{EntryKind, RawEntry};
use log::trace;
use readshelf_config::LibraryConfig;
use readshelf_core::{Book, DEFAULT_AUTHOR};
use std::collections::HashSet;

/// Book file extensions accepted out of the box
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "epub"];

/// Maps raw directory entries to candidate books
///
/// Rejection is filtering policy, not failure: directories and files with
/// unsupported extensions simply produce no book.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    extensions: HashSet<String>,
    default_author: String,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self::new(SUPPORTED_EXTENSIONS.iter().copied(), DEFAULT_AUTHOR)
    }
}

impl EntryFilter {
    /// Creates a filter for the given extensions (leading dots and case ignored)
    pub fn new<I, S>(extensions: I, default_author: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            extensions,
            default_author: default_author.into(),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(&config.supported_extensions, config.default_author.as_str())
    }

    /// Returns true if `name` carries an accepted extension and a non-empty stem
    pub fn is_supported(&self, name: &str) -> bool {
        split_extension(name)
            .map(|(_, ext)| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    /// Turns an accepted entry into a book, or rejects it
    pub fn classify(&self, entry: &RawEntry) -> Option<Book> {
        if entry.kind != EntryKind::File {
            trace!("Skipping directory entry: {}", entry.name);
            return None;
        }

        match split_extension(&entry.name) {
            Some((stem, ext)) if self.extensions.contains(&ext.to_lowercase()) => {
                Some(Book::new(stem, self.default_author.as_str()))
            }
            _ => {
                trace!("Skipping unsupported file: {}", entry.name);
                None
            }
        }
    }

    /// Classifies every entry, keeping accepted books in input order
    pub fn filter<'a, I>(&self, entries: I) -> Vec<Book>
    where
        I: IntoIterator<Item = &'a RawEntry>,
    {
        entries
            .into_iter()
            .filter_map(|entry| self.classify(entry))
            .collect()
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }
}

/// Splits `name` at its final dot; the stem must hold more than whitespace
fn split_extension(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.trim().is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}
