use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            department: "Engineering".to_string(),
            bio: "Senior Software Engineer with 5+ years of experience in document management systems."
                .to_string(),
        }
    }
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Nothing is stored; the save only logs and confirms.
    pub fn save(&self) -> &'static str {
        info!(email = %self.email, department = %self.department, "profile saved");
        "Profile updated successfully!"
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;

    #[test]
    fn default_profile_saves_with_confirmation() {
        let mut profile = Profile::default();
        assert_eq!(profile.display_name(), "John Doe");

        profile.department = "Legal".to_string();
        assert_eq!(profile.save(), "Profile updated successfully!");
        assert_eq!(profile.department, "Legal");
    }
}
