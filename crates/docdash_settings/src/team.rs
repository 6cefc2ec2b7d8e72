use chrono::NaiveDate;
use docdash_contract::{BadgeTone, TeamMember};

pub fn role_badge(role: &str) -> BadgeTone {
    match role.to_ascii_lowercase().as_str() {
        "admin" => BadgeTone::Red,
        "editor" => BadgeTone::Blue,
        "viewer" => BadgeTone::Green,
        _ => BadgeTone::Gray,
    }
}

pub fn team_members() -> Vec<TeamMember> {
    [
        (1, "Sarah Chen", "sarah.chen@company.com", "Admin", "Finance", 15),
        (2, "Mike Johnson", "mike.johnson@company.com", "Editor", "Marketing", 14),
        (3, "Emily Davis", "emily.davis@company.com", "Viewer", "HR", 13),
    ]
    .into_iter()
    .map(|(id, name, email, role, department, dom)| TeamMember {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        last_active: NaiveDate::from_ymd_opt(2024, 1, dom).unwrap_or_default(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{role_badge, team_members};
    use docdash_contract::BadgeTone;

    #[test]
    fn role_badges() {
        assert_eq!(role_badge("Admin"), BadgeTone::Red);
        assert_eq!(role_badge("editor"), BadgeTone::Blue);
        assert_eq!(role_badge("VIEWER"), BadgeTone::Green);
        assert_eq!(role_badge("Owner"), BadgeTone::Gray);
    }

    #[test]
    fn roster_serializes_dates_as_iso() {
        let members = team_members();
        let value = serde_json::to_value(&members[0]).expect("serialize");
        assert_eq!(value["last_active"], "2024-01-15");
    }
}
