use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The token is already past its expiry, there is nothing left to revoke.
    #[error("Invalid token")]
    InvalidToken,
}

/// Store of revoked refresh tokens, keyed by the token's SHA-256 hash.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Revoke a token until `expires_at`; the entry disappears afterwards.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
