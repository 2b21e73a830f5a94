pub trait PasswordPolicy: Send + Sync {
    /// Check a candidate password for the account named `username`.
    fn validate(&self, username: &str, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must contain at least {0} characters")]
    TooShort(usize),

    #[error("Password must not exceed {0} characters")]
    TooLong(usize),

    #[error("Password cannot be entirely numeric")]
    EntirelyNumeric,

    #[error("Password is too similar to the username")]
    TooSimilarToUsername,
}
