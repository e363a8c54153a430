// FILE: crates/library/src/session.rs

use crate::builder::{CatalogBuilder, ScanCancel};
use crate::ingestion::{IngestionEvent, IngestionNotice, IngestionState, IngestionStateMachine};
use crate::provider::FileSystemProvider;
use log::{debug, warn};
use readshelf_config::LibraryConfig;
use readshelf_core::{Catalog, PreviewFolder};

/// Catalog plus the add-folder workflow, as seen by a UI shell
///
/// The catalog is replaced wholesale on every change; readers holding an
/// earlier `Catalog` keep seeing that snapshot.
#[derive(Debug, Default)]
pub struct LibrarySession {
    builder: CatalogBuilder,
    ingestion: IngestionStateMachine,
    catalog: Catalog,
    notice: Option<IngestionNotice>,
}

impl LibrarySession {
    pub fn new(builder: CatalogBuilder) -> Self {
        Self {
            builder,
            ..Self::default()
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(CatalogBuilder::from_config(config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ingestion_state(&self) -> &IngestionState {
        self.ingestion.state()
    }

    pub fn preview_folder(&self) -> Option<&PreviewFolder> {
        self.ingestion.preview()
    }

    /// Latest notice, if the last scan produced one
    pub fn notice(&self) -> Option<&IngestionNotice> {
        self.notice.as_ref()
    }

    pub fn start_add(&mut self) -> IngestionEvent {
        let event = self.ingestion.start_add();
        if event == IngestionEvent::Started {
            self.notice = None;
        }
        event
    }

    /// Picks and scans a folder; only runs while picking
    pub async fn scan<P>(&mut self, provider: &P) -> IngestionEvent
    where
        P: FileSystemProvider + ?Sized,
    {
        self.scan_with_cancel(provider, &ScanCancel::new()).await
    }

    pub async fn scan_with_cancel<P>(&mut self, provider: &P, cancel: &ScanCancel) -> IngestionEvent
    where
        P: FileSystemProvider + ?Sized,
    {
        if self.ingestion.state() != &IngestionState::Picking {
            warn!("Scan requested while {}", self.ingestion.state().name());
            return IngestionEvent::Rejected {
                state: self.ingestion.state().name(),
            };
        }

        self.notice = None;
        let outcome = self.builder.scan(provider, cancel).await;
        let event = self.ingestion.apply_scan(outcome);

        if let IngestionEvent::EmptyFolder { folder } = &event {
            self.notice = Some(IngestionNotice::EmptyFolder {
                folder: folder.clone(),
            });
        }
        event
    }

    /// Appends the previewed folder to the catalog
    pub fn confirm(&mut self) -> IngestionEvent {
        let event = self.ingestion.confirm(&self.builder);
        if let IngestionEvent::Confirmed(folder) = &event {
            match self.catalog.try_with_folder(folder.clone()) {
                Ok(catalog) => {
                    self.catalog = catalog;
                    debug!("Catalog now holds {} folders", self.catalog.len());
                }
                Err(e) => {
                    warn!("Dropping folder {}: {}", folder.name(), e);
                    return IngestionEvent::Ignored;
                }
            }
        }
        event
    }

    pub fn cancel(&mut self) -> IngestionEvent {
        self.notice = None;
        self.ingestion.cancel()
    }

    /// Flips the expand state of one folder; false for an invalid index
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        match self.catalog.with_toggled(index) {
            Ok(catalog) => {
                self.catalog = catalog;
                true
            }
            Err(e) => {
                warn!("Ignoring toggle: {}", e);
                false
            }
        }
    }
}
