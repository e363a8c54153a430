//! Book domain model

use crate::types::Validator;
use serde::{Deserialize, Serialize};

/// Author used when ingestion cannot determine one
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// A single readable file in the library
///
/// Fields are private: a book never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    cover_image: Option<String>,
}

impl Book {
    /// Creates a book without a cover image
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover_image: None,
        }
    }

    /// Returns a copy of this book carrying the given cover image reference
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.author.trim().is_empty() {
            errors.push("Author cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new() {
        let book = Book::new("The Silent Library", "Arthur Gray");
        assert_eq!(book.title(), "The Silent Library");
        assert_eq!(book.author(), "Arthur Gray");
        assert!(book.cover_image().is_none());
    }

    #[test]
    fn test_book_with_cover_image() {
        let book = Book::new("Midnight Pages", DEFAULT_AUTHOR).with_cover_image("/covers/2.jpg");
        assert_eq!(book.cover_image(), Some("/covers/2.jpg"));
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("Paper Hearts", DEFAULT_AUTHOR);
        assert_eq!(book.to_string(), "Paper Hearts by Unknown");
    }

    #[test]
    fn test_book_validation_success() {
        assert!(Book::new("Lost Chapters", "Willow Dane").is_valid());
    }

    #[test]
    fn test_book_validation_empty_fields() {
        let book = Book::new("  ", "");
        let errors = book.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Between Lines", "Xander Quinn");
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"cover_image\":null"));
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
