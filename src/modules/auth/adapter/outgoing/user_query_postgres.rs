use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_mock_user_model(id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            username: "ana".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_username_success() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_username("ana").await.unwrap().unwrap();

        assert_eq!(user.id.value(), user_id);
        assert_eq!(user.username, "ana");
        assert_eq!(user.password_hash, "$argon2id$hash");
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("nobody").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("ana").await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
