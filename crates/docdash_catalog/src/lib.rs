pub mod display;
pub mod fixtures;
pub mod library;
pub mod search;
pub mod sort;

pub use display::{format_date, initials, type_icon};
pub use library::DocumentLibrary;
pub use search::filter_documents;
pub use sort::{size_magnitude, sort_documents, SortDirection, SortField, SortState};
