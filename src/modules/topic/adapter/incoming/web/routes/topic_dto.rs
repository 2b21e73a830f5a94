use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entry::adapter::incoming::web::routes::EntryResponse;
use crate::topic::application::domain::entities::{Topic, TopicDetail};

/// Topic as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    #[schema(example = "3f6c1e2a-9a51-4d8e-b1a2-6c0f4b9d2e11")]
    pub id: String,

    #[schema(example = "Chess")]
    pub text: String,

    #[schema(example = false)]
    pub is_public: bool,

    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub owner_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id.to_string(),
            text: topic.text,
            is_public: topic.is_public,
            owner_id: topic.owner.to_string(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

/// A topic with its entries, newest entry first
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetailResponse {
    pub topic: TopicResponse,
    pub entries: Vec<EntryResponse>,
}

impl From<TopicDetail> for TopicDetailResponse {
    fn from(detail: TopicDetail) -> Self {
        Self {
            topic: detail.topic.into(),
            entries: detail.entries.into_iter().map(EntryResponse::from).collect(),
        }
    }
}
