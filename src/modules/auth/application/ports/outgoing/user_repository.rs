use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub password_hash: String,
}

/// What the caller learns about a freshly written user.
#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
}
