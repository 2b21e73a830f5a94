use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId, entry::application::domain::entities::Entry,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEntryError {
    /// Missing entry, or its topic is not visible to the viewer.
    #[error("Entry not found")]
    NotFound,

    #[error("Failed to fetch entry: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetEntryUseCase: Send + Sync {
    async fn execute(&self, viewer: Option<UserId>, entry_id: Uuid)
        -> Result<Entry, GetEntryError>;
}
