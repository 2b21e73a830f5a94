use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;
}
