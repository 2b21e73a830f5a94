use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

/// Letters, digits and `@ . + - _`, up to 150 characters.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]{1,150}$").expect("valid regex"));

// ========================= Create User Input =========================

/// Registration form data. Construction checks everything that does not
/// need the password policy or the database.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserInputError {
    #[error("Username may contain only letters, digits and @/./+/-/_ (max 150 characters)")]
    InvalidUsername,

    #[error("The two password fields didn't match")]
    PasswordMismatch,
}

impl CreateUserInput {
    pub fn new(
        username: String,
        password1: String,
        password2: String,
    ) -> Result<Self, CreateUserInputError> {
        let username = username.trim();

        if !USERNAME_RE.is_match(username) {
            return Err(CreateUserInputError::InvalidUsername);
        }

        if password1 != password2 {
            return Err(CreateUserInputError::PasswordMismatch);
        }

        Ok(Self {
            username: username.to_string(),
            password: password1,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Output & Errors =========================

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("{0}")]
    InvalidPassword(PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        // 1️⃣ Password policy
        self.password_policy
            .validate(input.username(), input.password())
            .map_err(CreateUserError::InvalidPassword)?;

        // 2️⃣ Username must be free
        let existing = self
            .query
            .find_by_username(input.username())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(username = %input.username(), "Registration rejected: username taken");
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        // 3️⃣ Hash
        let password_hash = self
            .password_hasher
            .hash_password(input.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist; the unique index still guards concurrent registrations
        let created = self
            .repository
            .create_user(CreateUserData {
                username: input.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UsernameAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
            })?;

        info!(user_id = %created.id, "User created");

        Ok(CreateUserOutput {
            user_id: created.id,
            username: created.username,
        })
    }
}
