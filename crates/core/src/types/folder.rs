//! Folder and preview folder models

use crate::types::{Book, Validator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One imported directory's books plus its UI expand state
///
/// Books are shared behind an `Arc`, so producing a toggled copy of a folder
/// never copies or touches book data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    name: String,
    books: Arc<[Book]>,
    expanded: bool,
}

impl Folder {
    /// Creates a collapsed folder
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books: books.into(),
            expanded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Books in enumeration order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns a new folder identical to this one except for `expanded`
    pub fn toggled(&self) -> Self {
        Self {
            name: self.name.clone(),
            books: Arc::clone(&self.books),
            expanded: !self.expanded,
        }
    }

    /// Returns true when both folders share the same book storage
    pub fn shares_books_with(&self, other: &Folder) -> bool {
        Arc::ptr_eq(&self.books, &other.books)
    }
}

impl Validator for Folder {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Folder name cannot be empty".to_string());
        }

        for (i, book) in self.books.iter().enumerate() {
            if let Err(book_errors) = book.validate() {
                errors.extend(book_errors.into_iter().map(|e| format!("books[{}]: {}", i, e)));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A scan result awaiting the user's confirm or cancel decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFolder {
    name: String,
    books: Vec<Book>,
}

impl PreviewFolder {
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<PreviewFolder> for Folder {
    fn from(preview: PreviewFolder) -> Self {
        Folder::new(preview.name, preview.books)
    }
}
