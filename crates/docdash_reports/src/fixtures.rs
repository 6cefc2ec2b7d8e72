use chrono::NaiveDate;
use docdash_contract::ReportRow;

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or_default()
}

pub fn sample_report_rows() -> Vec<ReportRow> {
    [
        (1, "Q4_Financial_Report.pdf", "Upload", "Sarah Chen", day(2024, 1, 15), "14:30", "2.4 MB"),
        (2, "Marketing_Strategy.docx", "Edit", "Mike Johnson", day(2024, 1, 14), "09:15", "1.8 MB"),
        (3, "Project_Timeline.xlsx", "Share", "Emily Davis", day(2024, 1, 13), "16:45", "856 KB"),
        (4, "Design_Mockups.psd", "Download", "Alex Wilson", day(2024, 1, 12), "11:20", "15.2 MB"),
        (5, "Meeting_Notes.txt", "Delete", "Sarah Chen", day(2024, 1, 11), "13:10", "24 KB"),
    ]
    .into_iter()
    .map(|(id, document, action, user, date, time, size)| ReportRow {
        id,
        document: document.to_string(),
        action: action.to_string(),
        user: user.to_string(),
        date,
        time: time.to_string(),
        size: size.to_string(),
    })
    .collect()
}
