//! Readshelf Library Ingestion
//!
//! Turns a user-picked folder into catalog entries: the provider lists the
//! folder, the filter keeps supported books, and the ingestion state machine
//! walks the user through preview and confirmation.

pub mod builder;
pub mod error;
pub mod filter;
pub mod ingestion;
pub mod provider;
pub mod session;

pub use builder::{CatalogBuilder, ScanCancel, ScanOutcome};
pub use error::{LibraryError, LibraryResult};
pub use filter::EntryFilter;
pub use ingestion::{IngestionEvent, IngestionNotice, IngestionState, IngestionStateMachine};
pub use provider::{
    EntryKind, EntryStream, FileSystemProvider, LocalFileSystem, MemoryFileSystem, RawEntry,
    RootHandle,
};
pub use session::LibrarySession;
