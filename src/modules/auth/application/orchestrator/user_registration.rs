use std::sync::Arc;

use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};

// ============================================================================
// Registration Output
// ============================================================================
#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user_id: UserId,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================================================================
// User Registration (Orchestration Layer)
// ============================================================================

/// Creates the account and logs the new user in straight away.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    token_provider: Arc<dyn TokenProvider>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            create_user_use_case,
            token_provider,
        }
    }

    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        // Step 1: Create user account
        let created = self.create_user_use_case.execute(input).await?;

        // Step 2: Issue the session tokens
        let tokens = self
            .token_provider
            .generate_access_token(created.user_id.value())
            .and_then(|access| {
                self.token_provider
                    .generate_refresh_token(created.user_id.value())
                    .map(|refresh| (access, refresh))
            });

        let (access_token, refresh_token) = tokens.map_err(|e| {
            // The account exists at this point; the user can still log in
            error!(user_id = %created.user_id, error = %e, "Token issuance after registration failed");
            UserRegistrationError::TokenGenerationFailed(e.to_string())
        })?;

        Ok(UserRegistrationOutput {
            user_id: created.user_id,
            username: created.username,
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{TokenClaims, TokenError};
    use crate::auth::application::use_cases::create_user::CreateUserOutput;
    use async_trait::async_trait;
    use uuid::Uuid;

    // =====================================================
    // Mock CreateUserUseCase
    // =====================================================

    #[derive(Clone)]
    struct MockCreateUserUseCase {
        result: Result<CreateUserOutput, CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUserUseCase {
        async fn execute(
            &self,
            _input: CreateUserInput,
        ) -> Result<CreateUserOutput, CreateUserError> {
            self.result.clone()
        }
    }

    // =====================================================
    // Mock TokenProvider
    // =====================================================

    struct MockTokenProvider {
        fail: bool,
    }

    impl TokenProvider for MockTokenProvider {
        fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
            if self.fail {
                return Err(TokenError::EncodingError("bad key".to_string()));
            }
            Ok(format!("access-{user_id}"))
        }

        fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
            Ok(format!("refresh-{user_id}"))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::MalformedToken)
        }
    }

    // =====================================================
    // Helpers
    // =====================================================

    fn input() -> CreateUserInput {
        CreateUserInput::new(
            "ana".to_string(),
            "s3cret-pass".to_string(),
            "s3cret-pass".to_string(),
        )
        .unwrap()
    }

    fn orchestrator(
        result: Result<CreateUserOutput, CreateUserError>,
        tokens_fail: bool,
    ) -> UserRegistrationOrchestrator {
        UserRegistrationOrchestrator::new(
            Arc::new(MockCreateUserUseCase { result }),
            Arc::new(MockTokenProvider { fail: tokens_fail }),
        )
    }

    // =====================================================
    // Tests
    // =====================================================

    #[tokio::test]
    async fn registration_returns_user_and_tokens() {
        let user_id = UserId::from(Uuid::new_v4());
        let orch = orchestrator(
            Ok(CreateUserOutput {
                user_id,
                username: "ana".to_string(),
            }),
            false,
        );

        let output = orch.register_user(input()).await.unwrap();

        assert_eq!(output.user_id, user_id);
        assert_eq!(output.username, "ana");
        assert_eq!(output.access_token, format!("access-{user_id}"));
        assert_eq!(output.refresh_token, format!("refresh-{user_id}"));
    }

    #[tokio::test]
    async fn create_user_error_is_propagated() {
        let orch = orchestrator(Err(CreateUserError::UsernameAlreadyExists), false);

        let result = orch.register_user(input()).await;

        assert!(matches!(
            result,
            Err(UserRegistrationError::CreateUserFailed(
                CreateUserError::UsernameAlreadyExists
            ))
        ));
    }

    #[tokio::test]
    async fn token_failure_is_reported() {
        let orch = orchestrator(
            Ok(CreateUserOutput {
                user_id: UserId::from(Uuid::new_v4()),
                username: "ana".to_string(),
            }),
            true,
        );

        let result = orch.register_user(input()).await;

        assert!(matches!(
            result,
            Err(UserRegistrationError::TokenGenerationFailed(_))
        ));
    }
}
