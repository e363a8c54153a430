// FILE: crates/library/src/error.rs

use readshelf_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Catalog error: {0}")]
    Core(#[from] CoreError),

    #[error("Folder not readable: {0}")]
    FolderUnreadable(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
