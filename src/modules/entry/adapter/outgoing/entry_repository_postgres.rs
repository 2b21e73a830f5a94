use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::domain::entities::Entry;
use crate::modules::entry::application::ports::outgoing::{
    CreateEntryData, EntryRepository, EntryRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as EntryActiveModel, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            text: Set(data.text),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted: EntryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<Entry, EntryRepositoryError> {
        // topic_id stays NotSet so the UPDATE never touches it
        let active = EntryActiveModel {
            id: Unchanged(entry_id),
            topic_id: NotSet,
            text: Set(text),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let updated: EntryModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => EntryRepositoryError::EntryNotFound,
            other => EntryRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_domain())
    }
}
