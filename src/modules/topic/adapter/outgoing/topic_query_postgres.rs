use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `is_public OR user_id = viewer`, or just `is_public` for anonymous viewers.
fn visible_to(viewer: Option<UserId>) -> Condition {
    let condition = Condition::any().add(TopicColumn::IsPublic.eq(true));

    match viewer {
        Some(viewer) => condition.add(TopicColumn::UserId.eq(viewer.value())),
        None => condition,
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_visible(&self, viewer: Option<UserId>) -> Result<Vec<Topic>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(visible_to(viewer))
            .order_by_asc(TopicColumn::CreatedAt)
            .order_by_asc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TopicModel::to_domain).collect())
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(TopicModel::to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, QueryTrait, RuntimeErr};

    fn create_topic_model(
        user_id: Uuid,
        text: &str,
        is_public: bool,
        offset_secs: i64,
    ) -> TopicModel {
        let created_at = (Utc::now() + chrono::Duration::seconds(offset_secs)).fixed_offset();

        TopicModel {
            id: Uuid::new_v4(),
            user_id,
            text: text.to_string(),
            is_public,
            created_at,
            updated_at: created_at,
        }
    }

    fn list_sql(viewer: Option<UserId>) -> String {
        TopicEntity::find()
            .filter(visible_to(viewer))
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn anonymous_filter_only_matches_public_topics() {
        let sql = list_sql(None);

        assert!(sql.contains(r#""topics"."is_public" = TRUE"#), "{sql}");
        assert!(!sql.contains("user_id\" ="), "{sql}");
    }

    #[test]
    fn viewer_filter_matches_public_or_owned_topics() {
        let viewer = UserId::from(Uuid::new_v4());
        let sql = list_sql(Some(viewer));

        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains(&viewer.to_string()), "{sql}");
    }

    #[tokio::test]
    async fn test_list_visible_maps_rows_in_database_order() {
        let owner = Uuid::new_v4();
        let older = create_topic_model(owner, "Private notes", false, -20);
        let newer = create_topic_model(Uuid::new_v4(), "Public notes", true, -10);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![older.clone(), newer.clone()]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topics = query
            .list_visible(Some(UserId::from(owner)))
            .await
            .unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].text, "Private notes");
        assert_eq!(topics[0].owner, UserId::from(owner));
        assert!(!topics[0].is_public);
        assert_eq!(topics[1].text, "Public notes");
        assert!(topics[1].is_public);
    }

    #[tokio::test]
    async fn test_list_visible_empty_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        assert!(query.list_visible(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_visible_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.list_visible(None).await;

        assert!(matches!(result, Err(TopicQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let model = create_topic_model(Uuid::new_v4(), "Chess", false, 0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topic = query.find_by_id(model.id).await.unwrap().unwrap();

        assert_eq!(topic.id, model.id);
        assert_eq!(topic.text, "Chess");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".into())])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(TopicQueryError::DatabaseError(_))));
    }
}
