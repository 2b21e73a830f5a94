use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A dated note under a topic. Ownership and visibility come from the topic.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
