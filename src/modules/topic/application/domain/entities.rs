use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::Entry;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }
}

/// A topic together with its entries, newest entry first.
#[derive(Serialize, Debug, Clone)]
pub struct TopicDetail {
    pub topic: Topic,
    pub entries: Vec<Entry>,
}

impl TopicDetail {
    /// Sorts `entries` by creation time, newest first. Ties on the timestamp
    /// are broken by id so the order is total.
    pub fn new(topic: Topic, mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Self { topic, entries }
    }
}
