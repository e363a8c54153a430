//! Readshelf domain values
//!
//! Books, folders and the catalog they are committed to. Every value here is
//! immutable once built: changes produce a new value instead of editing one
//! in place, so a UI can keep rendering an old snapshot safely.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{Book, Catalog, Folder, PreviewFolder, Validator, DEFAULT_AUTHOR};
