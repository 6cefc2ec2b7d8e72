use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocdashError {
    #[error("new passwords don't match")]
    PasswordMismatch,
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),
    #[error("unknown report filter field: {0}")]
    UnknownFilterField(String),
    #[error("unknown notification preference: {0}")]
    UnknownPreference(String),
    #[error("expected <preference>=<on|off>, got {0}")]
    InvalidToggle(String),
    #[error("document {0} not found")]
    DocumentNotFound(u64),
}
