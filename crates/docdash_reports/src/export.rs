use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use docdash_contract::{DocdashError, ReportRow};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for ExportFormat {
    type Err = DocdashError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(DocdashError::UnknownExportFormat(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub filename: String,
    pub rows: usize,
    pub message: String,
}

pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "document_report_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Names the export and builds the confirmation text. Nothing is written.
pub fn export_report(format: ExportFormat, rows: &[ReportRow], today: NaiveDate) -> ExportReceipt {
    let filename = export_filename(format, today);
    info!(format = %format, filename = %filename, rows = rows.len(), "report export requested");
    ExportReceipt {
        format,
        message: format!("Report exported as {format}: {filename}"),
        filename,
        rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{export_filename, export_report, ExportFormat};
    use crate::fixtures::sample_report_rows;
    use chrono::NaiveDate;

    #[test]
    fn filename_uses_iso_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("date");
        assert_eq!(
            export_filename(ExportFormat::Csv, date),
            "document_report_2024-03-07.csv"
        );
        assert_eq!(
            export_filename(ExportFormat::Pdf, date),
            "document_report_2024-03-07.pdf"
        );
    }

    #[test]
    fn receipt_carries_confirmation_message() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date");
        let receipt = export_report(ExportFormat::Pdf, &sample_report_rows(), date);
        assert_eq!(receipt.rows, 5);
        assert_eq!(
            receipt.message,
            "Report exported as PDF: document_report_2024-01-15.pdf"
        );
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
