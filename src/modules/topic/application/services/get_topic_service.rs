use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::outgoing::EntryQuery,
    topic::application::{
        domain::{entities::TopicDetail, policies::TopicAccess},
        ports::incoming::use_cases::{GetTopicError, GetTopicUseCase},
        ports::outgoing::TopicQuery,
    },
};

/// Topic detail page: the topic plus its entries, if the viewer may see it.
#[derive(Debug, Clone)]
pub struct GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    topics: Q,
    entries: E,
}

impl<Q, E> GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    pub fn new(topics: Q, entries: E) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<Q, E> GetTopicUseCase for GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer: Option<UserId>,
        topic_id: Uuid,
    ) -> Result<TopicDetail, GetTopicError> {
        let topic = self
            .topics
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicError::NotFound)?;

        TopicAccess::ensure_viewable(&topic, viewer).map_err(|_| GetTopicError::NotFound)?;

        let entries = self
            .entries
            .list_by_topic(topic.id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?;

        Ok(TopicDetail::new(topic, entries))
    }
}
