use docdash_contract::DocdashError;
use serde::Deserialize;
use tracing::info;

/// Password form fields. Values never reach logs or `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

impl PasswordChange {
    pub fn new(
        current: impl Into<String>,
        new: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DocdashError> {
        if self.new_password != self.confirm_password {
            return Err(DocdashError::PasswordMismatch);
        }
        Ok(())
    }

    /// On success the form is cleared; on mismatch it is left as entered.
    pub fn submit(&mut self) -> Result<&'static str, DocdashError> {
        self.validate()?;
        info!("password changed");
        *self = Self::default();
        Ok("Password changed successfully!")
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordChange;
    use docdash_contract::DocdashError;

    #[test]
    fn mismatch_is_rejected_and_form_kept() {
        let mut form = PasswordChange::new("old", "hunter2", "hunter3");
        assert_eq!(form.submit(), Err(DocdashError::PasswordMismatch));
        assert_eq!(form.new_password, "hunter2");
    }

    #[test]
    fn matching_passwords_clear_the_form() {
        let mut form = PasswordChange::new("old", "hunter2", "hunter2");
        assert_eq!(form.submit(), Ok("Password changed successfully!"));
        assert_eq!(form, PasswordChange::default());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let form = PasswordChange::new("old", "hunter2", "hunter2");
        assert!(!format!("{form:?}").contains("hunter2"));
    }
}
