//! Backup document export and import.
//!
//! # Responsibility
//! - Serialize the full event collection plus settings to one JSON
//!   document and read it back losslessly.
//!
//! # Invariants
//! - Import replaces the stored collection wholesale.
//! - The document timestamp comes from the caller; nothing here reads a
//!   clock.

use crate::model::event::Event;
use crate::model::settings::Settings;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Complete application backup payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub events: Vec<Event>,
    #[serde(default)]
    pub settings: Settings,
    /// Saved world-clock timezone identifiers; display-only data carried so
    /// a restore reproduces the whole app state.
    #[serde(default)]
    pub world_clocks: Vec<String>,
    pub export_date: String,
}

impl BackupDocument {
    /// Assembles a document from current state; `export_date` is a
    /// caller-supplied timestamp string.
    pub fn new(
        events: Vec<Event>,
        settings: Settings,
        world_clocks: Vec<String>,
        export_date: impl Into<String>,
    ) -> Self {
        Self {
            events,
            settings,
            world_clocks,
            export_date: export_date.into(),
        }
    }
}

/// The document is not valid backup JSON.
#[derive(Debug)]
pub struct ExportError(serde_json::Error);

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid backup document: {}", self.0)
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Renders the backup document as pretty-printed JSON.
pub fn export_json(document: &BackupDocument) -> Result<String, ExportError> {
    serde_json::to_string_pretty(document).map_err(ExportError)
}

/// Parses a backup document produced by [`export_json`].
pub fn import_json(raw: &str) -> Result<BackupDocument, ExportError> {
    serde_json::from_str(raw).map_err(ExportError)
}
