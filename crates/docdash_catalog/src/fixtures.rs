//! Sample library contents shown by the dashboard.

use chrono::NaiveDate;
use docdash_contract::{ActivityItem, DashboardStats, DocumentRecord, DocumentType, VersionEntry};

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or_default()
}

fn document(
    id: u64,
    name: &str,
    version: &str,
    last_modified: NaiveDate,
    owner: &str,
    size: &str,
    doc_type: DocumentType,
) -> DocumentRecord {
    DocumentRecord {
        id,
        name: name.to_string(),
        version: version.to_string(),
        last_modified,
        owner: owner.to_string(),
        size: size.to_string(),
        doc_type,
    }
}

pub fn sample_documents() -> Vec<DocumentRecord> {
    vec![
        document(
            1,
            "Q4_Financial_Report.pdf",
            "v2.1",
            day(2024, 1, 15),
            "Sarah Chen",
            "2.4 MB",
            DocumentType::Pdf,
        ),
        document(
            2,
            "Marketing_Strategy.docx",
            "v1.3",
            day(2024, 1, 14),
            "Mike Johnson",
            "1.8 MB",
            DocumentType::Word,
        ),
        document(
            3,
            "Project_Timeline.xlsx",
            "v3.0",
            day(2024, 1, 13),
            "Emily Davis",
            "856 KB",
            DocumentType::Excel,
        ),
        document(
            4,
            "Design_Mockups.psd",
            "v1.0",
            day(2024, 1, 12),
            "Alex Wilson",
            "15.2 MB",
            DocumentType::Photoshop,
        ),
    ]
}

fn version(
    label: &str,
    date: NaiveDate,
    time: &str,
    author: &str,
    changes: &str,
    size: &str,
    is_current: bool,
) -> VersionEntry {
    VersionEntry {
        version: label.to_string(),
        date,
        time: time.to_string(),
        author: author.to_string(),
        changes: changes.to_string(),
        size: size.to_string(),
        is_current,
    }
}

/// Every document shares the same canned history; newest first.
pub fn sample_version_history() -> Vec<VersionEntry> {
    vec![
        version(
            "v2.1",
            day(2024, 1, 15),
            "14:30",
            "Sarah Chen",
            "Updated financial projections for Q4",
            "2.4 MB",
            true,
        ),
        version(
            "v2.0",
            day(2024, 1, 12),
            "09:15",
            "Mike Johnson",
            "Added executive summary section",
            "2.2 MB",
            false,
        ),
        version(
            "v1.3",
            day(2024, 1, 10),
            "16:45",
            "Sarah Chen",
            "Corrected revenue calculations",
            "2.1 MB",
            false,
        ),
        version(
            "v1.2",
            day(2024, 1, 8),
            "11:20",
            "Emily Davis",
            "Updated charts and graphs",
            "2.0 MB",
            false,
        ),
        version(
            "v1.1",
            day(2024, 1, 5),
            "13:10",
            "Sarah Chen",
            "Initial draft with basic structure",
            "1.8 MB",
            false,
        ),
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_documents: 1247,
        active_users: 23,
        storage_used_percent: 68,
        versions_created: 89,
    }
}

pub fn recent_activity() -> Vec<ActivityItem> {
    [
        ("Document uploaded", "Q4_Financial_Report.pdf", "Sarah Chen", "2 minutes ago"),
        ("Version created", "Marketing_Strategy.docx", "Mike Johnson", "15 minutes ago"),
        ("Document shared", "Project_Timeline.xlsx", "Emily Davis", "1 hour ago"),
        ("Document deleted", "Old_Proposal.pdf", "John Smith", "2 hours ago"),
    ]
    .into_iter()
    .map(|(action, file, user, time)| ActivityItem {
        action: action.to_string(),
        file: file.to_string(),
        user: user.to_string(),
        time: time.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{sample_documents, sample_version_history};
    use std::collections::HashSet;

    #[test]
    fn document_ids_are_unique() {
        let documents = sample_documents();
        let ids: HashSet<u64> = documents.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), documents.len());
    }

    #[test]
    fn history_has_single_current_entry_at_head() {
        let history = sample_version_history();
        assert_eq!(history.iter().filter(|v| v.is_current).count(), 1);
        assert!(history[0].is_current);
        assert!(history.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }
}
