use chrono::NaiveDate;

pub mod badge;
pub mod error;
pub mod record;

pub use badge::BadgeTone;
pub use error::DocdashError;
pub use record::{
    ActivityItem, DashboardStats, DocumentId, DocumentRecord, DocumentType, ReportRow,
    TeamMember, VersionEntry,
};

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DocdashError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DocdashError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_date, DocdashError};

    #[test]
    fn parses_iso_dates_only() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(parse_date(" 2024-02-29 ").is_ok());
        assert_eq!(
            parse_date("2023-02-29"),
            Err(DocdashError::InvalidDate("2023-02-29".to_string()))
        );
        assert!(parse_date("01/15/2024").is_err());
    }
}
