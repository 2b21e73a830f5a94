use async_trait::async_trait;
use uuid::Uuid;

use super::entry_text::{normalize, EntryTextError};
use crate::{
    auth::application::domain::entities::UserId, entry::application::domain::entities::Entry,
};

/// Replaces an entry's text. Carries no topic id, so an edit never moves an entry.
#[derive(Debug, Clone)]
pub struct UpdateEntryCommand {
    owner: UserId,
    entry_id: Uuid,
    text: String,
}

impl UpdateEntryCommand {
    pub fn new(owner: UserId, entry_id: Uuid, text: String) -> Result<Self, EntryTextError> {
        Ok(Self {
            owner,
            entry_id,
            text: normalize(&text)?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEntryError {
    /// Missing entry, or its topic belongs to someone else.
    #[error("Entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateEntryUseCase: Send + Sync {
    async fn execute(&self, command: UpdateEntryCommand) -> Result<Entry, UpdateEntryError>;
}
