use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use uuid::Uuid;

/// Redis-backed store of revoked refresh tokens.
///
/// One key per revoked token:
/// ```text
/// auth:revoked:{token_hash} -> "{user_id}"
/// ```
/// The key's TTL is the token's remaining lifetime, so Redis drops the entry
/// once the token would have expired anyway.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:revoked:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::token_key(&token_hash), user_id.to_string(), ttl as u64)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }
}
