//! Domain types for Readshelf
//!
//! - `book`: a single readable file
//! - `folder`: committed folders and the uncommitted preview
//! - `catalog`: the ordered collection of committed folders
//! - `common`: shared traits

mod book;
mod catalog;
mod common;
mod folder;

// Re-export all public types
pub use book::{Book, DEFAULT_AUTHOR};
pub use catalog::Catalog;
pub use common::Validator;
pub use folder::{Folder, PreviewFolder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let book = Book::new("Dune", DEFAULT_AUTHOR);
        let preview = PreviewFolder::new("shelf", vec![book]);
        let catalog = Catalog::new().with_folder(Folder::from(preview));
        assert_eq!(catalog.len(), 1);
    }
}
