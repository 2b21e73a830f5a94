use async_trait::async_trait;
use uuid::Uuid;

use super::entry_text::{normalize, EntryTextError};
use crate::{
    auth::application::domain::entities::UserId, entry::application::domain::entities::Entry,
};

// ──────────────────────────────────────────────────────────
// Create Entry Command
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    owner: UserId,
    topic_id: Uuid,
    text: String,
}

impl CreateEntryCommand {
    pub fn new(owner: UserId, topic_id: Uuid, text: String) -> Result<Self, EntryTextError> {
        Ok(Self {
            owner,
            topic_id,
            text: normalize(&text)?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    /// Missing topic, or a topic owned by someone else.
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, command: CreateEntryCommand) -> Result<Entry, CreateEntryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_trims_text_and_keeps_topic() {
        let owner = UserId::from(Uuid::new_v4());
        let topic_id = Uuid::new_v4();

        let cmd = CreateEntryCommand::new(owner, topic_id, "\tRuy Lopez  ".to_string()).unwrap();

        assert_eq!(cmd.owner(), owner);
        assert_eq!(cmd.topic_id(), topic_id);
        assert_eq!(cmd.text(), "Ruy Lopez");
    }

    #[test]
    fn command_rejects_blank_text() {
        let result = CreateEntryCommand::new(
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            " \n ".to_string(),
        );

        assert_eq!(result.unwrap_err(), EntryTextError::EmptyText);
    }
}
