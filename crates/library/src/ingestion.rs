// FILE: crates/library/src/ingestion.rs

//! Add-folder workflow state machine
//!
//! `Idle -> Picking -> Previewing -> Idle`. Every request that does not fit
//! the current state is answered with an event instead of an error, so a
//! caller can never drive the machine into an invalid state.

use crate::builder::{CatalogBuilder, ScanOutcome};
use log::{debug, info, warn};
use readshelf_core::{Folder, PreviewFolder};

/// Where the add-folder workflow currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IngestionState {
    #[default]
    Idle,
    Picking,
    Previewing(PreviewFolder),
}

impl IngestionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, IngestionState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            IngestionState::Idle => "idle",
            IngestionState::Picking => "picking",
            IngestionState::Previewing(_) => "previewing",
        }
    }
}

/// Non-fatal message to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionNotice {
    /// The picked folder held no supported books
    EmptyFolder { folder: String },
}

/// What a request did to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionEvent {
    /// Picking started
    Started,
    /// Request did not fit the current state; nothing changed
    Rejected { state: &'static str },
    /// A preview is ready for confirmation
    PreviewReady,
    /// Scan found nothing; still picking
    EmptyFolder { folder: String },
    /// Picker dismissed or scan cancelled
    PickerCancelled,
    /// The preview was committed as this folder
    Confirmed(Folder),
    /// The preview was thrown away
    Discarded,
    /// Harmless no-op
    Ignored,
}

#[derive(Debug, Default)]
pub struct IngestionStateMachine {
    state: IngestionState,
}

impl IngestionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &IngestionState {
        &self.state
    }

    pub fn preview(&self) -> Option<&PreviewFolder> {
        match &self.state {
            IngestionState::Previewing(preview) => Some(preview),
            _ => None,
        }
    }

    pub fn start_add(&mut self) -> IngestionEvent {
        if !self.state.is_idle() {
            warn!("Add folder requested while {}", self.state.name());
            return IngestionEvent::Rejected {
                state: self.state.name(),
            };
        }

        debug!("Ingestion: idle -> picking");
        self.state = IngestionState::Picking;
        IngestionEvent::Started
    }

    /// Feeds a scan result into the machine; only meaningful while picking
    pub fn apply_scan(&mut self, outcome: ScanOutcome) -> IngestionEvent {
        if self.state != IngestionState::Picking {
            warn!("Scan result arrived while {}", self.state.name());
            return IngestionEvent::Rejected {
                state: self.state.name(),
            };
        }

        match outcome {
            ScanOutcome::Preview(preview) => {
                info!(
                    "Previewing {} with {} books",
                    preview.name(),
                    preview.len()
                );
                self.state = IngestionState::Previewing(preview);
                IngestionEvent::PreviewReady
            }
            ScanOutcome::Empty { folder } => {
                info!("Folder {} has no supported books", folder);
                IngestionEvent::EmptyFolder { folder }
            }
            ScanOutcome::Cancelled => {
                debug!("Ingestion: picking -> idle (cancelled)");
                self.state = IngestionState::Idle;
                IngestionEvent::PickerCancelled
            }
        }
    }

    /// Commits the preview through `builder`; a no-op unless previewing
    pub fn confirm(&mut self, builder: &CatalogBuilder) -> IngestionEvent {
        match std::mem::take(&mut self.state) {
            IngestionState::Previewing(preview) => {
                info!("Confirmed folder {}", preview.name());
                IngestionEvent::Confirmed(builder.promote(preview))
            }
            other => {
                debug!("Confirm ignored while {}", other.name());
                self.state = other;
                IngestionEvent::Ignored
            }
        }
    }

    /// Abandons the current pick or preview
    pub fn cancel(&mut self) -> IngestionEvent {
        match std::mem::take(&mut self.state) {
            IngestionState::Idle => IngestionEvent::Ignored,
            IngestionState::Picking => {
                debug!("Ingestion: picking -> idle");
                IngestionEvent::PickerCancelled
            }
            IngestionState::Previewing(preview) => {
                info!("Discarded preview of {}", preview.name());
                IngestionEvent::Discarded
            }
        }
    }
}
