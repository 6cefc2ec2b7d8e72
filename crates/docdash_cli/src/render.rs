use anyhow::Result;
use docdash_catalog::{format_date, initials, type_icon, SortField, SortState};
use docdash_contract::{
    ActivityItem, DashboardStats, DocumentRecord, ReportRow, TeamMember, VersionEntry,
};
use docdash_reports::{action_badge, format_date_time};
use docdash_settings::{role_badge, NotificationPreference, NotificationPreferences, Profile};
use docdash_transfer::{UploadStatus, UploadTask};

pub fn dashboard(stats: &DashboardStats, activity: &[ActivityItem]) {
    println!("Total documents   {}", stats.total_documents);
    println!("Active users      {}", stats.active_users);
    println!("Storage used      {}%", stats.storage_used_percent);
    println!("Versions created  {}", stats.versions_created);
    println!();
    println!("Recent activity");
    for item in activity {
        println!(
            "  {:<18} {:<26} {:<14} {}",
            item.action, item.file, item.user, item.time
        );
    }
}

fn header(label: &str, field: SortField, sort: SortState) -> String {
    match sort.indicator(field) {
        Some(arrow) => format!("{label} {arrow}"),
        None => label.to_string(),
    }
}

pub fn documents(rows: &[DocumentRecord], sort: SortState) {
    println!(
        "{:<4} {:<30} {:<8} {:<16} {:<18} {}",
        "",
        header("Name", SortField::Name, sort),
        "Version",
        header("Last Modified", SortField::LastModified, sort),
        header("Owner", SortField::Owner, sort),
        header("Size", SortField::Size, sort),
    );

    if rows.is_empty() {
        println!();
        println!("No documents found");
        println!("Try adjusting your search criteria");
        return;
    }

    for doc in rows {
        println!(
            "{:<4} {:<30} {:<8} {:<16} {:<18} {}",
            type_icon(&doc.doc_type),
            doc.name,
            doc.version,
            format_date(doc.last_modified),
            format!("[{}] {}", initials(&doc.owner), doc.owner),
            doc.size,
        );
    }
}

pub fn history(doc: &DocumentRecord, history: &[VersionEntry]) {
    println!("Version history: {}", doc.name);
    for entry in history {
        let marker = if entry.is_current { "current" } else { "" };
        println!(
            "  {:<6} {:<14} {:<6} {:<14} {:<8} {:<8} {}",
            entry.version,
            format_date(entry.date),
            entry.time,
            entry.author,
            entry.size,
            marker,
            entry.changes,
        );
    }
}

pub fn upload_progress(task: &UploadTask) {
    println!(
        "{:<32} {:>9}  {}",
        task.file.name,
        task.progress_label(),
        task.size_label()
    );
}

pub fn upload_summary(tasks: &[UploadTask]) {
    let completed = tasks
        .iter()
        .filter(|task| task.status == UploadStatus::Completed)
        .count();
    println!("{completed} of {} files uploaded", tasks.len());
}

pub fn report(rows: &[ReportRow]) -> Result<()> {
    if rows.is_empty() {
        println!("No report data");
        return Ok(());
    }

    for row in rows {
        println!(
            "{:<26} {:<10} {:<8} [{}] {:<14} {:<24} {}",
            row.document,
            row.action,
            action_badge(&row.action).label(),
            initials(&row.user),
            row.user,
            format_date_time(row.date, &row.time)?,
            row.size,
        );
    }
    println!("Showing {} results", rows.len());
    Ok(())
}

pub fn profile(profile: &Profile) {
    println!("{} <{}>", profile.display_name(), profile.email);
    println!("Phone       {}", profile.phone);
    println!("Department  {}", profile.department);
    println!("{}", profile.bio);
}

pub fn notifications(preferences: &NotificationPreferences) {
    for key in NotificationPreference::ALL {
        let state = if preferences.get(key) { "on" } else { "off" };
        println!("{:<22} {}", key.label(), state);
    }
}

pub fn team(members: &[TeamMember]) {
    for member in members {
        println!(
            "[{}] {:<14} {:<28} {:<8} {:<8} {:<10} {}",
            initials(&member.name),
            member.name,
            member.email,
            member.role,
            role_badge(&member.role).label(),
            member.department,
            format_date(member.last_active),
        );
    }
}
