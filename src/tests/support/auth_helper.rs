use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "learning_log".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }
}

/// A real HS256 token service with a fixed test secret.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header value carrying an access token for `user_id`.
pub fn bearer_for(provider: &Arc<dyn TokenProvider + Send + Sync>, user_id: UserId) -> String {
    let token = provider
        .generate_access_token(user_id.value())
        .expect("test access token");

    format!("Bearer {token}")
}
