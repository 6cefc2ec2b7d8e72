pub mod simulator;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use simulator::{SimulatorConfig, UploadSimulator};

pub type UploadId = Uuid;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "jpg", "jpeg", "png", "gif",
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),
    #[error("invalid simulator config: {0}")]
    InvalidConfig(String),
    #[error("event consumer lagged, {0} events skipped")]
    Lagged(u64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadFile {
    pub id: UploadId,
    pub name: String,
    pub size_bytes: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadTask {
    pub file: UploadFile,
    /// Percent in `0.0..=100.0`, never decreases.
    pub progress: f64,
    pub status: UploadStatus,
}

impl UploadTask {
    pub fn new(file: UploadFile) -> Self {
        Self {
            file,
            progress: 0.0,
            status: UploadStatus::Uploading,
        }
    }

    /// Applies one tick. Returns the status after the tick; a finished task is left alone.
    pub fn advance(&mut self, increment: f64) -> UploadStatus {
        if self.status != UploadStatus::Uploading {
            return self.status;
        }

        self.progress += increment.max(0.0);
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.status = UploadStatus::Completed;
        }
        self.status
    }

    pub fn progress_label(&self) -> String {
        match self.status {
            UploadStatus::Completed => "Complete".to_string(),
            _ => format!("{}%", self.progress.round() as u64),
        }
    }

    pub fn size_label(&self) -> String {
        size_label(self.file.size_bytes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum UploadEvent {
    Added { id: UploadId, name: String },
    Progress { id: UploadId, progress: f64 },
    Completed { id: UploadId },
    Removed { id: UploadId },
}

impl UploadEvent {
    pub fn id(&self) -> UploadId {
        match self {
            UploadEvent::Added { id, .. }
            | UploadEvent::Progress { id, .. }
            | UploadEvent::Completed { id }
            | UploadEvent::Removed { id } => *id,
        }
    }
}

/// Megabytes with one decimal, e.g. `1.0 MB`.
pub fn size_label(size_bytes: u64) -> String {
    format!("{:.1} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

pub fn accepts(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}
