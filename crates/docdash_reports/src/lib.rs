pub mod export;
pub mod filters;
pub mod fixtures;
pub mod generator;

use chrono::{NaiveDate, NaiveTime};
use docdash_contract::{BadgeTone, DocdashError};
use thiserror::Error;

pub use export::{export_filename, export_report, ExportFormat, ExportReceipt};
pub use filters::{FilterField, ReportFilters};
pub use generator::{FixtureReportSource, ReportGenerator, ReportSource};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("a report is already being generated")]
    AlreadyGenerating,
    #[error("report source failed: {0}")]
    Source(String),
    #[error(transparent)]
    Invalid(#[from] DocdashError),
}

/// Pill colour for an activity row, matched case-insensitively.
pub fn action_badge(action: &str) -> BadgeTone {
    match action.to_ascii_lowercase().as_str() {
        "upload" => BadgeTone::Green,
        "edit" => BadgeTone::Blue,
        "share" => BadgeTone::Purple,
        "download" => BadgeTone::Orange,
        "delete" => BadgeTone::Red,
        _ => BadgeTone::Gray,
    }
}

/// `Jan 15, 2024, 02:30 PM` from an ISO date and a `HH:MM` time.
pub fn format_date_time(date: NaiveDate, time: &str) -> Result<String, DocdashError> {
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| DocdashError::InvalidTime(time.to_string()))?;
    Ok(date.and_time(time).format("%b %-d, %Y, %I:%M %p").to_string())
}
