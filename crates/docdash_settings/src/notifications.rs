use std::str::FromStr;

use docdash_contract::DocdashError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPreference {
    EmailNotifications,
    DocumentUploads,
    VersionUpdates,
    ShareNotifications,
    WeeklyReports,
}

impl FromStr for NotificationPreference {
    type Err = DocdashError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "emailnotifications" => Ok(NotificationPreference::EmailNotifications),
            "documentuploads" => Ok(NotificationPreference::DocumentUploads),
            "versionupdates" => Ok(NotificationPreference::VersionUpdates),
            "sharenotifications" => Ok(NotificationPreference::ShareNotifications),
            "weeklyreports" => Ok(NotificationPreference::WeeklyReports),
            _ => Err(DocdashError::UnknownPreference(raw.to_string())),
        }
    }
}

impl NotificationPreference {
    pub const ALL: [NotificationPreference; 5] = [
        NotificationPreference::EmailNotifications,
        NotificationPreference::DocumentUploads,
        NotificationPreference::VersionUpdates,
        NotificationPreference::ShareNotifications,
        NotificationPreference::WeeklyReports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationPreference::EmailNotifications => "Email notifications",
            NotificationPreference::DocumentUploads => "Document uploads",
            NotificationPreference::VersionUpdates => "Version updates",
            NotificationPreference::ShareNotifications => "Share notifications",
            NotificationPreference::WeeklyReports => "Weekly reports",
        }
    }
}

/// Parses `key=value` where value is `on|off|true|false`, e.g. `weekly-reports=off`.
pub fn parse_toggle(raw: &str) -> Result<(NotificationPreference, bool), DocdashError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| DocdashError::InvalidToggle(raw.to_string()))?;
    let key = key.parse::<NotificationPreference>()?;
    let enabled = match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => return Err(DocdashError::InvalidToggle(raw.to_string())),
    };
    Ok((key, enabled))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub document_uploads: bool,
    pub version_updates: bool,
    pub share_notifications: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            document_uploads: true,
            version_updates: false,
            share_notifications: true,
            weekly_reports: true,
        }
    }
}

impl NotificationPreferences {
    fn slot(&mut self, key: NotificationPreference) -> &mut bool {
        match key {
            NotificationPreference::EmailNotifications => &mut self.email_notifications,
            NotificationPreference::DocumentUploads => &mut self.document_uploads,
            NotificationPreference::VersionUpdates => &mut self.version_updates,
            NotificationPreference::ShareNotifications => &mut self.share_notifications,
            NotificationPreference::WeeklyReports => &mut self.weekly_reports,
        }
    }

    pub fn get(&self, key: NotificationPreference) -> bool {
        match key {
            NotificationPreference::EmailNotifications => self.email_notifications,
            NotificationPreference::DocumentUploads => self.document_uploads,
            NotificationPreference::VersionUpdates => self.version_updates,
            NotificationPreference::ShareNotifications => self.share_notifications,
            NotificationPreference::WeeklyReports => self.weekly_reports,
        }
    }

    pub fn set(&mut self, key: NotificationPreference, enabled: bool) {
        debug!(preference = ?key, enabled, "notification preference changed");
        *self.slot(key) = enabled;
    }

    /// Nothing is stored; the save only logs and confirms.
    pub fn save(&self) -> &'static str {
        info!(preferences = ?self, "notification preferences saved");
        "Notification preferences saved!"
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_toggle, NotificationPreference, NotificationPreferences};
    use docdash_contract::DocdashError;

    #[test]
    fn toggles_single_preference() {
        let mut prefs = NotificationPreferences::default();
        assert!(!prefs.version_updates);

        let key: NotificationPreference = "versionUpdates".parse().expect("known key");
        prefs.set(key, true);
        assert!(prefs.get(NotificationPreference::VersionUpdates));
        assert!(prefs.weekly_reports);
    }

    #[test]
    fn rejects_unknown_key() {
        assert!("smsAlerts".parse::<NotificationPreference>().is_err());
    }

    #[test]
    fn parses_toggle_assignments() {
        assert_eq!(
            parse_toggle("weekly-reports=off"),
            Ok((NotificationPreference::WeeklyReports, false))
        );
        assert_eq!(
            parse_toggle("versionUpdates=TRUE"),
            Ok((NotificationPreference::VersionUpdates, true))
        );
        assert_eq!(
            parse_toggle("weekly-reports"),
            Err(DocdashError::InvalidToggle("weekly-reports".to_string()))
        );
        assert_eq!(
            parse_toggle("weekly-reports=maybe"),
            Err(DocdashError::InvalidToggle("weekly-reports=maybe".to_string()))
        );
        assert!(matches!(
            parse_toggle("sms=on"),
            Err(DocdashError::UnknownPreference(_))
        ));
    }

    #[test]
    fn save_confirms_without_changing_state() {
        let prefs = NotificationPreferences::default();
        assert_eq!(prefs.save(), "Notification preferences saved!");
        assert_eq!(prefs, NotificationPreferences::default());
    }
}
