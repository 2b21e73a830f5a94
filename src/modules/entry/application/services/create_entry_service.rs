use async_trait::async_trait;

use crate::{
    entry::application::{
        domain::entities::Entry,
        ports::{
            incoming::use_cases::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase},
            outgoing::{CreateEntryData, EntryRepository},
        },
    },
    topic::application::{domain::policies::TopicAccess, ports::outgoing::TopicQuery},
};

/// Adds an entry under a topic the requester owns.
#[derive(Debug, Clone)]
pub struct CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    topics: T,
    repository: R,
}

impl<T, R> CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(topics: T, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<T, R> CreateEntryUseCase for CreateEntryService<T, R>
where
    T: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: CreateEntryCommand) -> Result<Entry, CreateEntryError> {
        let topic = self
            .topics
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?
            .ok_or(CreateEntryError::TopicNotFound)?;

        TopicAccess::ensure_modifiable(&topic, command.owner())
            .map_err(|_| CreateEntryError::TopicNotFound)?;

        let data = CreateEntryData {
            topic_id: topic.id,
            text: command.text().to_string(),
        };

        self.repository
            .create_entry(data)
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))
    }
}
