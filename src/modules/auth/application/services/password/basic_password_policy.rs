use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl BasicPasswordPolicy {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 128;
}

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, username: &str, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort(Self::MIN_LENGTH));
        }

        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong(Self::MAX_LENGTH));
        }

        if password.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::EntirelyNumeric);
        }

        if password.to_lowercase() == username.trim().to_lowercase() {
            return Err(PasswordPolicyError::TooSimilarToUsername);
        }

        Ok(())
    }
}
