use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::Entry;
use crate::topic::application::domain::entities::Topic;

pub fn user() -> UserId {
    UserId::from(Uuid::new_v4())
}

pub fn topic_fixture(owner: UserId, text: &str, is_public: bool) -> Topic {
    let now = Utc::now();
    Topic {
        id: Uuid::new_v4(),
        owner,
        text: text.to_string(),
        is_public,
        created_at: now,
        updated_at: now,
    }
}

/// An entry created `age_minutes` ago.
pub fn entry_fixture(topic_id: Uuid, text: &str, age_minutes: i64) -> Entry {
    let created_at = Utc::now() - Duration::minutes(age_minutes);
    Entry {
        id: Uuid::new_v4(),
        topic_id,
        text: text.to_string(),
        created_at,
        updated_at: created_at,
    }
}
