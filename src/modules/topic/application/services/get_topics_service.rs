use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::{
        domain::entities::Topic,
        ports::incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
        ports::outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, viewer: Option<UserId>) -> Result<Vec<Topic>, GetTopicsError> {
        self.query
            .list_visible(viewer)
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}
