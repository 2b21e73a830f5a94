use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, topic::application::domain::entities::Topic,
};

pub const MAX_TOPIC_TEXT_CHARS: usize = 200;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    owner: UserId,
    text: String,
    is_public: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Topic text cannot be empty")]
    EmptyText,

    #[error("Topic text cannot exceed 200 characters")]
    TextTooLong,
}

impl CreateTopicCommand {
    pub fn new(
        owner: UserId,
        text: String,
        is_public: bool,
    ) -> Result<Self, CreateTopicCommandError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(CreateTopicCommandError::EmptyText);
        }

        if text.chars().count() > MAX_TOPIC_TEXT_CHARS {
            return Err(CreateTopicCommandError::TextTooLong);
        }

        Ok(Self {
            owner,
            text: text.to_string(),
            is_public,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
