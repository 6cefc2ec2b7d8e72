use docdash_contract::DocumentRecord;

/// Keeps records whose name or owner contains `query`, ignoring case.
/// An empty query keeps everything in the original order.
pub fn filter_documents(records: &[DocumentRecord], query: &str) -> Vec<DocumentRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

fn matches(record: &DocumentRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle) || record.owner.to_lowercase().contains(needle)
}
