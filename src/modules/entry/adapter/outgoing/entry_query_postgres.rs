use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::domain::entities::Entry;
use crate::modules::entry::application::ports::outgoing::{EntryQuery, EntryQueryError};

use super::sea_orm_entity::{Column as EntryColumn, Entity as EntryEntity, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError> {
        let models: Vec<EntryModel> = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by_desc(EntryColumn::CreatedAt)
            .order_by_desc(EntryColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(EntryModel::to_domain).collect())
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError> {
        let model = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(EntryModel::to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn create_entry_model(topic_id: Uuid, text: &str, age_secs: i64) -> EntryModel {
        let created_at = (Utc::now() - chrono::Duration::seconds(age_secs)).fixed_offset();

        EntryModel {
            id: Uuid::new_v4(),
            topic_id,
            text: text.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_list_by_topic_orders_newest_first() {
        let topic_id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<EntryModel>::new()])
                .into_connection(),
        );

        let query = EntryQueryPostgres::new(db.clone());
        query.list_by_topic(topic_id).await.unwrap();
        drop(query);

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = &log[0].statements()[0].sql;

        assert!(sql.contains(r#"WHERE "entries"."topic_id" = $1"#), "{sql}");
        assert!(
            sql.contains(r#"ORDER BY "entries"."created_at" DESC, "entries"."id" DESC"#),
            "{sql}"
        );
    }

    #[tokio::test]
    async fn test_list_by_topic_maps_rows() {
        let topic_id = Uuid::new_v4();
        let newer = create_entry_model(topic_id, "Endgames", 10);
        let older = create_entry_model(topic_id, "Openings", 600);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer.clone(), older.clone()]])
            .into_connection();

        let query = EntryQueryPostgres::new(Arc::new(db));

        let entries = query.list_by_topic(topic_id).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, newer.id);
        assert_eq!(entries[1].text, "Openings");
        assert!(entries.iter().all(|e| e.topic_id == topic_id));
    }

    #[tokio::test]
    async fn test_list_by_topic_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = EntryQueryPostgres::new(Arc::new(db));

        let result = query.list_by_topic(Uuid::new_v4()).await;

        assert!(matches!(result, Err(EntryQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let model = create_entry_model(Uuid::new_v4(), "Castling rules", 0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let query = EntryQueryPostgres::new(Arc::new(db));

        let entry = query.find_by_id(model.id).await.unwrap().unwrap();

        assert_eq!(entry.id, model.id);
        assert_eq!(entry.topic_id, model.topic_id);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<EntryModel>::new()])
            .into_connection();

        let query = EntryQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
