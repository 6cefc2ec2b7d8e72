use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type DocumentId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    Pdf,
    Word,
    Excel,
    Photoshop,
    Other(String),
}

impl DocumentType {
    pub fn label(&self) -> &str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Word => "Word",
            DocumentType::Excel => "Excel",
            DocumentType::Photoshop => "Photoshop",
            DocumentType::Other(label) => label,
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pdf" => DocumentType::Pdf,
            "word" => DocumentType::Word,
            "excel" => DocumentType::Excel,
            "photoshop" => DocumentType::Photoshop,
            _ => DocumentType::Other(value),
        }
    }
}

impl From<&str> for DocumentType {
    fn from(value: &str) -> Self {
        DocumentType::from(value.to_string())
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single row of the document library table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub name: String,
    pub version: String,
    pub last_modified: NaiveDate,
    pub owner: String,
    /// Human formatted, e.g. `2.4 MB`.
    pub size: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    pub date: NaiveDate,
    pub time: String,
    pub author: String,
    pub changes: String,
    pub size: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: u64,
    pub document: String,
    pub action: String,
    pub user: String,
    pub date: NaiveDate,
    /// `HH:MM`, 24 hour clock.
    pub time: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub last_active: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_documents: u64,
    pub active_users: u64,
    pub storage_used_percent: u8,
    pub versions_created: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub action: String,
    pub file: String,
    pub user: String,
    pub time: String,
}
