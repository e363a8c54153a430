//! The committed catalog of folders

use crate::error::{CoreError, Result};
use crate::types::{Folder, Validator};
use serde::{Deserialize, Serialize};

/// Ordered collection of committed folders, in commit order
///
/// Every change returns a new catalog; the receiver is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    folders: Vec<Folder>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn get(&self, index: usize) -> Option<&Folder> {
        self.folders.get(index)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Total number of books across all folders
    pub fn book_count(&self) -> usize {
        self.folders.iter().map(Folder::len).sum()
    }

    /// Returns a new catalog with `folder` appended
    pub fn with_folder(&self, folder: Folder) -> Self {
        let mut folders = Vec::with_capacity(self.folders.len() + 1);
        folders.extend(self.folders.iter().cloned());
        folders.push(folder);
        Self { folders }
    }

    /// Like [`Catalog::with_folder`], but rejects a folder that fails validation
    pub fn try_with_folder(&self, folder: Folder) -> Result<Self> {
        folder
            .validate()
            .map_err(|errors| CoreError::invalid("folder", errors.join("; ")))?;
        Ok(self.with_folder(folder))
    }

    /// Returns a new catalog whose folder at `index` has `expanded` flipped
    pub fn with_toggled(&self, index: usize) -> Result<Self> {
        if index >= self.folders.len() {
            return Err(CoreError::index_out_of_range(index, self.folders.len()));
        }

        let folders = self
            .folders
            .iter()
            .enumerate()
            .map(|(i, folder)| if i == index { folder.toggled() } else { folder.clone() })
            .collect();

        Ok(Self { folders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Book, DEFAULT_AUTHOR};

    fn folder(name: &str, books: usize) -> Folder {
        let books = (0..books)
            .map(|i| Book::new(format!("{}-{}", name, i), DEFAULT_AUTHOR))
            .collect();
        Folder::new(name, books)
    }

    #[test]
    fn test_with_folder_appends_in_commit_order() {
        let catalog = Catalog::new()
            .with_folder(folder("first", 1))
            .with_folder(folder("second", 2));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.folders()[0].name(), "first");
        assert_eq!(catalog.folders()[1].name(), "second");
        assert_eq!(catalog.book_count(), 3);
    }

    #[test]
    fn test_try_with_folder_rejects_unnamed() {
        let catalog = Catalog::new();
        let err = catalog.try_with_folder(folder(" ", 1)).unwrap_err();
        assert!(matches!(err, CoreError::Invalid { entity: "folder", .. }));

        let catalog = catalog.try_with_folder(folder("shelf", 1)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_with_folder_leaves_original_untouched() {
        let original = Catalog::new().with_folder(folder("first", 1));
        let _grown = original.with_folder(folder("second", 1));
        assert_eq!(original.len(), 1);
    }

    #[test]
    fn test_with_toggled_flips_only_target() {
        let catalog = Catalog::new()
            .with_folder(folder("a", 1))
            .with_folder(folder("b", 1))
            .with_folder(folder("c", 1));

        let toggled = catalog.with_toggled(1).unwrap();

        assert!(!toggled.folders()[0].is_expanded());
        assert!(toggled.folders()[1].is_expanded());
        assert!(!toggled.folders()[2].is_expanded());
        assert_eq!(toggled.folders()[0], catalog.folders()[0]);
        assert_eq!(toggled.folders()[2], catalog.folders()[2]);
        assert!(!catalog.folders()[1].is_expanded());
    }

    #[test]
    fn test_with_toggled_twice_restores() {
        let catalog = Catalog::new()
            .with_folder(folder("a", 2))
            .with_folder(folder("b", 3));

        for i in 0..catalog.len() {
            let twice = catalog.with_toggled(i).unwrap().with_toggled(i).unwrap();
            assert_eq!(twice, catalog);
        }
    }

    #[test]
    fn test_with_toggled_out_of_range() {
        let catalog = Catalog::new().with_folder(folder("a", 1));
        let result = catalog.with_toggled(1);
        assert_eq!(result, Err(CoreError::index_out_of_range(1, 1)));
    }
}
