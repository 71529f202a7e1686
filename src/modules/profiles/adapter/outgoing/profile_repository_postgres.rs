use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::profiles::application::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileRepositoryError, ProfileView,
};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProfileView>, ProfileRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }

    async fn create(
        &self,
        app_id: String,
        data: ProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            app_id: Set(app_id.trim().to_string()),
            name: Set(data.name.trim().to_string()),
            username: Set(data.username),
            url: Set(data.url),
            stats: Set(data.stats),
            description: Set(data.description),
            color: Set(data.color),
            sort_order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_app_id_error)?;

        Ok(model_to_view(inserted))
    }

    async fn update(
        &self,
        app_id: &str,
        data: ProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.name = Set(data.name.trim().to_string());
        model.username = Set(data.username);
        model.url = Set(data.url);
        model.stats = Set(data.stats);
        model.description = Set(data.description);
        model.color = Set(data.color);
        model.sort_order = Set(data.order);
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::AppId.eq(app_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        Ok(model_to_view(updated))
    }

    async fn delete(&self, app_id: &str) -> Result<(), ProfileRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::AppId.eq(app_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_view(model: sea_orm_entity::Model) -> ProfileView {
    ProfileView {
        id: model.app_id,
        name: model.name,
        username: model.username,
        url: model.url,
        stats: model.stats,
        description: model.description,
        color: model.color,
        order: model.sort_order,
    }
}

fn map_app_id_error(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        ProfileRepositoryError::AppIdAlreadyExists
    } else {
        ProfileRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(app_id: &str, order: i32) -> sea_orm_entity::Model {
        let now = Utc::now().fixed_offset();
        sea_orm_entity::Model {
            id: Uuid::new_v4(),
            app_id: app_id.to_string(),
            name: "GitHub".to_string(),
            username: "octocat".to_string(),
            url: "https://github.com/octocat".to_string(),
            stats: Some("42 repos".to_string()),
            description: None,
            color: "bg-foreground".to_string(),
            sort_order: order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("github", 1), model("leetcode", 2)]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let profiles = repo.list().await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, "github");
        assert_eq!(profiles[0].stats.as_deref(), Some("42 repos"));
        assert_eq!(profiles[0].order, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_profile_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete("ghost").await;

        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_missing_profile_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<sea_orm_entity::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update(
                "ghost",
                ProfileData {
                    name: "x".to_string(),
                    username: "y".to_string(),
                    url: "https://example.com".to_string(),
                    stats: None,
                    description: None,
                    color: "bg-foreground".to_string(),
                    order: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }
}
