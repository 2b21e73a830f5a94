use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError, TokenType,
};
use crate::auth::application::services::hash_token;

// ========================= Logout Request =========================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    refresh_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(refresh_token: Option<String>) -> Self {
        Self { refresh_token }
    }

    /// The supplied token, if it is not blank.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

// ====================== Logout Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ====================== Logout Error =============================
#[derive(Debug, Clone)]
pub enum LogoutError {
    TokenRevocationFailed(String),
    DatabaseError(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::TokenRevocationFailed(msg) => {
                write!(f, "Token revocation failed: {}", msg)
            }
            LogoutError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        match error {
            TokenRepositoryError::DatabaseError(msg) => LogoutError::DatabaseError(msg),
            TokenRepositoryError::InvalidToken => {
                LogoutError::TokenRevocationFailed(error.to_string())
            }
        }
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        if let Some(refresh_token) = request.refresh_token() {
            match self.token_provider.verify_token(refresh_token) {
                Ok(claims) if claims.token_type == TokenType::Refresh => {
                    // Only the hash is stored
                    let token_hash = hash_token(refresh_token);
                    let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
                        .unwrap_or_else(chrono::Utc::now);

                    match self
                        .token_repository
                        .blacklist_token(token_hash, claims.sub, expires_at)
                        .await
                    {
                        Ok(()) => info!(user_id = %claims.sub, "Refresh token revoked"),
                        // Already expired, nothing to revoke
                        Err(TokenRepositoryError::InvalidToken) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
                Ok(claims) => {
                    warn!(token_type = %claims.token_type, "Logout called with a non-refresh token");
                }
                Err(e) => {
                    // Logout succeeds for the client even when the token is unusable
                    warn!(error = %e, "Failed to verify token during logout");
                }
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
