use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entry::application::domain::entities::Entry;

/// Entry as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    #[schema(example = "9b2d7c40-1f3e-4a8b-8c6d-2e5f7a9b0c13")]
    pub id: String,

    #[schema(example = "3f6c1e2a-9a51-4d8e-b1a2-6c0f4b9d2e11")]
    pub topic_id: String,

    #[schema(example = "Learned the Sicilian Defense")]
    pub text: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            topic_id: entry.topic_id.to_string(),
            text: entry.text,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
