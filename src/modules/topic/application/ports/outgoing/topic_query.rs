use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every public topic, plus the viewer's own private ones. Oldest first.
    async fn list_visible(&self, viewer: Option<UserId>) -> Result<Vec<Topic>, TopicQueryError>;

    /// Looks a topic up without any access check.
    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;
}
