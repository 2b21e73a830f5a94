use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::auth::application::ports::outgoing::{
    TokenError, TokenProvider, TokenRepository, TokenType,
};
use crate::auth::application::services::hash_token;

// ========================= Refresh Token Request =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshTokenRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    TokenExpired,
    TokenInvalid,
    TokenNotYetValid,
    InvalidTokenType,
    InvalidSignature,
    TokenRevoked,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::InvalidSignature => write!(f, "Invalid token signature"),
            RefreshTokenError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshTokenError::TokenNotYetValid,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::InvalidSignature => RefreshTokenError::InvalidSignature,
            TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Exchanges a refresh token for a new pair. The presented token is revoked,
/// so each refresh token can be used once.
#[derive(Clone)]
pub struct RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenUseCase<R>
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
impl<R> IRefreshTokenUseCase for RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        // 1️⃣ Verify and decode
        let claims = self
            .token_provider
            .verify_token(request.refresh_token())
            .map_err(RefreshTokenError::from)?;

        // 2️⃣ Access tokens cannot be exchanged
        if claims.token_type != TokenType::Refresh {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        // 3️⃣ Reject revoked tokens
        let token_hash = hash_token(request.refresh_token());
        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        if revoked {
            warn!(user_id = %claims.sub, "Revoked refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        // 4️⃣ Issue the new pair
        let access_token = self
            .token_provider
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        // 5️⃣ Rotate: the old refresh token is spent
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(chrono::Utc::now);

        self.token_repository
            .blacklist_token(token_hash, claims.sub, expires_at)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token,
            refresh_token,
        })
    }
}
