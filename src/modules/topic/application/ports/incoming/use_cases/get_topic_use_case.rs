use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::TopicDetail,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    /// Covers both a missing topic and one the viewer may not see.
    #[error("Topic not found")]
    NotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer: Option<UserId>,
        topic_id: Uuid,
    ) -> Result<TopicDetail, GetTopicError>;
}
