//! Vec-backed implementations of the topic and entry outgoing ports.
//! Clones share storage, so a test can keep a handle and inspect writes.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::entities::Entry;
use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryQuery, EntryQueryError, EntryRepository, EntryRepositoryError,
};
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::domain::policies::TopicAccess;
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

// ──────────────────────────────────────────────────────────
// Topics
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryTopics {
    topics: Arc<Mutex<Vec<Topic>>>,
    fail_with: Option<String>,
}

impl InMemoryTopics {
    pub fn with(topics: Vec<Topic>) -> Self {
        Self {
            topics: Arc::new(Mutex::new(topics)),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<Topic> {
        self.topics.lock().unwrap().clone()
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopics {
    async fn list_visible(&self, viewer: Option<UserId>) -> Result<Vec<Topic>, TopicQueryError> {
        if let Some(msg) = &self.fail_with {
            return Err(TopicQueryError::DatabaseError(msg.clone()));
        }

        let mut visible: Vec<Topic> = self
            .all()
            .into_iter()
            .filter(|t| TopicAccess::can_view(t, viewer))
            .collect();
        visible.sort_by_key(|t| t.created_at);
        Ok(visible)
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        if let Some(msg) = &self.fail_with {
            return Err(TopicQueryError::DatabaseError(msg.clone()));
        }

        Ok(self.all().into_iter().find(|t| t.id == topic_id))
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopics {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        if let Some(msg) = &self.fail_with {
            return Err(TopicRepositoryError::DatabaseError(msg.clone()));
        }

        let now = Utc::now();
        let topic = Topic {
            id: Uuid::new_v4(),
            owner: data.owner,
            text: data.text,
            is_public: data.is_public,
            created_at: now,
            updated_at: now,
        };
        self.topics.lock().unwrap().push(topic.clone());
        Ok(topic)
    }
}

// ──────────────────────────────────────────────────────────
// Entries
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryEntries {
    entries: Arc<Mutex<Vec<Entry>>>,
    fail_with: Option<String>,
}

impl InMemoryEntries {
    pub fn with(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.fail_with {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EntryQuery for InMemoryEntries {
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError> {
        self.check().map_err(EntryQueryError::DatabaseError)?;

        let mut entries: Vec<Entry> = self
            .all()
            .into_iter()
            .filter(|e| e.topic_id == topic_id)
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError> {
        self.check().map_err(EntryQueryError::DatabaseError)?;

        Ok(self.all().into_iter().find(|e| e.id == entry_id))
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntries {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        self.check().map_err(EntryRepositoryError::DatabaseError)?;

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            topic_id: data.topic_id,
            text: data.text,
            created_at: now,
            updated_at: now,
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<Entry, EntryRepositoryError> {
        self.check().map_err(EntryRepositoryError::DatabaseError)?;

        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        entry.text = text;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u128, topic_id: Uuid, created_at: chrono::DateTime<Utc>) -> Entry {
        Entry {
            id: Uuid::from_u128(id),
            topic_id,
            text: format!("entry {id}"),
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn list_by_topic_breaks_timestamp_ties_by_id() {
        let topic_id = Uuid::new_v4();
        let now = Utc::now();
        let store = InMemoryEntries::with(vec![
            entry(1, topic_id, now),
            entry(3, topic_id, now - chrono::Duration::minutes(5)),
            entry(2, topic_id, now),
        ]);

        let ids: Vec<Uuid> = store
            .list_by_topic(topic_id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(1), Uuid::from_u128(3)]
        );
    }
}
