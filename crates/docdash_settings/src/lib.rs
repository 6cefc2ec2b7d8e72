pub mod notifications;
pub mod profile;
pub mod security;
pub mod team;

pub use notifications::{parse_toggle, NotificationPreference, NotificationPreferences};
pub use profile::Profile;
pub use security::PasswordChange;
pub use team::{role_badge, team_members};
