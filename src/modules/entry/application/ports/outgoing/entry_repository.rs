use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::domain::entities::Entry;

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Entry not found")]
    EntryNotFound,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError>;

    /// Rewrites the entry's text. The parent topic reference is left alone.
    async fn update_text(&self, entry_id: Uuid, text: String)
        -> Result<Entry, EntryRepositoryError>;
}
