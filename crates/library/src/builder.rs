// FILE: crates/library/src/builder.rs

use crate::filter::EntryFilter;
use crate::provider::FileSystemProvider;
use futures::StreamExt;
use log::{debug, info, warn};
use readshelf_config::LibraryConfig;
use readshelf_core::{Folder, PreviewFolder};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Entries read between cooperative yields
const YIELD_EVERY: usize = 64;

/// Cancellation flag shared between a running scan and whoever may dismiss it
#[derive(Debug, Clone, Default)]
pub struct ScanCancel {
    cancelled: Arc<AtomicBool>,
}

impl ScanCancel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Result of one pick-and-scan pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// At least one supported book was found
    Preview(PreviewFolder),
    /// The folder was read but held no supported books
    Empty { folder: String },
    /// The picker was dismissed or the scan was cancelled
    Cancelled,
}

/// Turns a picked folder into a preview, and a preview into a folder
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    filter: EntryFilter,
}

impl CatalogBuilder {
    pub fn new(filter: EntryFilter) -> Self {
        Self { filter }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(EntryFilter::from_config(config))
    }

    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    /// Picks a root through `provider` and filters its entries
    ///
    /// Unreadable entries are logged and skipped. Cancellation is checked
    /// before every entry.
    pub async fn scan<P>(&self, provider: &P, cancel: &ScanCancel) -> ScanOutcome
    where
        P: FileSystemProvider + ?Sized,
    {
        let root = match provider.pick_root().await {
            Some(root) => root,
            None => {
                debug!("Folder pick cancelled");
                return ScanOutcome::Cancelled;
            }
        };

        info!("Scanning folder: {}", root.name());

        let mut books = Vec::new();
        let mut seen = 0usize;
        let mut entries = provider.enumerate(&root);

        loop {
            if cancel.is_cancelled() {
                info!("Scan of {} cancelled after {} entries", root.name(), seen);
                return ScanOutcome::Cancelled;
            }

            let entry = match entries.next().await {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    warn!("Error reading entry in {}: {}", root.name(), e);
                    continue;
                }
                None => break,
            };

            seen += 1;
            if let Some(book) = self.filter.classify(&entry) {
                books.push(book);
            }

            if seen % YIELD_EVERY == 0 {
                tokio::task::yield_now().await;
            }
        }

        if books.is_empty() {
            info!("No supported books in {} ({} entries)", root.name(), seen);
            return ScanOutcome::Empty {
                folder: root.name().to_string(),
            };
        }

        info!(
            "Scan of {} found {} books in {} entries",
            root.name(),
            books.len(),
            seen
        );
        ScanOutcome::Preview(PreviewFolder::new(root.name(), books))
    }

    /// Commits a preview as a collapsed folder
    pub fn promote(&self, preview: PreviewFolder) -> Folder {
        Folder::from(preview)
    }
}
