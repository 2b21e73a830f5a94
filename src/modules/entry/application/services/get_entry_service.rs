use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::{
        domain::entities::Entry,
        ports::{
            incoming::use_cases::{GetEntryError, GetEntryUseCase},
            outgoing::EntryQuery,
        },
    },
    topic::application::{domain::policies::TopicAccess, ports::outgoing::TopicQuery},
};

#[derive(Debug, Clone)]
pub struct GetEntryService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    entries: E,
    topics: T,
}

impl<E, T> GetEntryService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    pub fn new(entries: E, topics: T) -> Self {
        Self { entries, topics }
    }
}

#[async_trait]
impl<E, T> GetEntryUseCase for GetEntryService<E, T>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer: Option<UserId>,
        entry_id: Uuid,
    ) -> Result<Entry, GetEntryError> {
        let entry = self
            .entries
            .find_by_id(entry_id)
            .await
            .map_err(|e| GetEntryError::QueryFailed(e.to_string()))?
            .ok_or(GetEntryError::NotFound)?;

        let topic = self
            .topics
            .find_by_id(entry.topic_id)
            .await
            .map_err(|e| GetEntryError::QueryFailed(e.to_string()))?
            .ok_or(GetEntryError::NotFound)?;

        TopicAccess::ensure_viewable(&topic, viewer).map_err(|_| GetEntryError::NotFound)?;

        Ok(entry)
    }
}
