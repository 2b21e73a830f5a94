use async_trait::async_trait;

use crate::{
    entry::application::{
        domain::entities::Entry,
        ports::{
            incoming::use_cases::{UpdateEntryCommand, UpdateEntryError, UpdateEntryUseCase},
            outgoing::{EntryQuery, EntryRepository, EntryRepositoryError},
        },
    },
    topic::application::{domain::policies::TopicAccess, ports::outgoing::TopicQuery},
};

#[derive(Debug, Clone)]
pub struct UpdateEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    entries: E,
    topics: T,
    repository: R,
}

impl<E, T, R> UpdateEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(entries: E, topics: T, repository: R) -> Self {
        Self {
            entries,
            topics,
            repository,
        }
    }
}

#[async_trait]
impl<E, T, R> UpdateEntryUseCase for UpdateEntryService<E, T, R>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateEntryCommand) -> Result<Entry, UpdateEntryError> {
        let entry = self
            .entries
            .find_by_id(command.entry_id())
            .await
            .map_err(|e| UpdateEntryError::RepositoryError(e.to_string()))?
            .ok_or(UpdateEntryError::NotFound)?;

        let topic = self
            .topics
            .find_by_id(entry.topic_id)
            .await
            .map_err(|e| UpdateEntryError::RepositoryError(e.to_string()))?
            .ok_or(UpdateEntryError::NotFound)?;

        TopicAccess::ensure_modifiable(&topic, command.owner())
            .map_err(|_| UpdateEntryError::NotFound)?;

        self.repository
            .update_text(entry.id, command.text().to_string())
            .await
            .map_err(|e| match e {
                // Deleted between the lookup and the write
                EntryRepositoryError::EntryNotFound => UpdateEntryError::NotFound,
                other => UpdateEntryError::RepositoryError(other.to_string()),
            })
    }
}
