//! Inert use cases that fill the slots a test does not care about.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::{
    create_user::{CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::{ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse},
    refresh_token::{
        IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
    },
};
use crate::entry::application::domain::entities::Entry;
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError, CreateEntryUseCase, GetEntryError, GetEntryUseCase,
    UpdateEntryCommand, UpdateEntryError, UpdateEntryUseCase,
};
use crate::topic::application::domain::entities::{Topic, TopicDetail};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, GetTopicError, GetTopicUseCase,
    GetTopicsError, GetTopicsUseCase,
};

// ============================================================
// Auth
// ============================================================

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        Ok(CreateUserOutput {
            user_id: UserId::from(Uuid::new_v4()),
            username: input.username().to_string(),
        })
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}

// ============================================================
// Topics
// ============================================================

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        Err(CreateTopicError::RepositoryError("stub".to_string()))
    }
}

pub struct StubGetTopicsUseCase;

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, _viewer: Option<UserId>) -> Result<Vec<Topic>, GetTopicsError> {
        Ok(vec![])
    }
}

pub struct StubGetTopicUseCase;

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(
        &self,
        _viewer: Option<UserId>,
        _topic_id: Uuid,
    ) -> Result<TopicDetail, GetTopicError> {
        Err(GetTopicError::NotFound)
    }
}

// ============================================================
// Entries
// ============================================================

pub struct StubCreateEntryUseCase;

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, _command: CreateEntryCommand) -> Result<Entry, CreateEntryError> {
        Err(CreateEntryError::TopicNotFound)
    }
}

pub struct StubGetEntryUseCase;

#[async_trait]
impl GetEntryUseCase for StubGetEntryUseCase {
    async fn execute(
        &self,
        _viewer: Option<UserId>,
        _entry_id: Uuid,
    ) -> Result<Entry, GetEntryError> {
        Err(GetEntryError::NotFound)
    }
}

pub struct StubUpdateEntryUseCase;

#[async_trait]
impl UpdateEntryUseCase for StubUpdateEntryUseCase {
    async fn execute(&self, _command: UpdateEntryCommand) -> Result<Entry, UpdateEntryError> {
        Err(UpdateEntryError::NotFound)
    }
}
