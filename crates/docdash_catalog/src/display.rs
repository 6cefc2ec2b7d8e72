use chrono::NaiveDate;
use docdash_contract::DocumentType;

pub fn type_icon(doc_type: &DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Pdf => "📄",
        DocumentType::Word => "📝",
        DocumentType::Excel => "📊",
        DocumentType::Photoshop => "🎨",
        DocumentType::Other(_) => "📁",
    }
}

/// First character of every space separated word, e.g. `Sarah Chen` -> `SC`.
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|part| part.chars().next()).collect()
}

/// `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
