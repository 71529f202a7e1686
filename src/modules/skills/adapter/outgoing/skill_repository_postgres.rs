use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::skills::application::ports::outgoing::{
    SkillCategoryData, SkillCategoryView, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SkillCategoryView>, SkillRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_view).collect()
    }

    async fn create(
        &self,
        app_id: String,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            app_id: Set(app_id.trim().to_string()),
            title: Set(data.title.trim().to_string()),
            icon: Set(data.icon),
            skills: Set(to_json(&data.skills)?),
            sort_order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_app_id_error)?;

        model_to_view(inserted)
    }

    async fn update(
        &self,
        app_id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.title = Set(data.title.trim().to_string());
        model.icon = Set(data.icon);
        model.skills = Set(to_json(&data.skills)?);
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
            .ok_or(SkillRepositoryError::NotFound)?;

        model_to_view(updated)
    }

    async fn delete(&self, app_id: &str) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::AppId.eq(app_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_view(
    model: sea_orm_entity::Model,
) -> Result<SkillCategoryView, SkillRepositoryError> {
    Ok(SkillCategoryView {
        id: model.app_id,
        title: model.title,
        icon: model.icon,
        skills: from_json(&model.skills)?,
        order: model.sort_order,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, SkillRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| SkillRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, SkillRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| SkillRepositoryError::SerializationError(e.to_string()))
}

fn map_app_id_error(e: DbErr) -> SkillRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        SkillRepositoryError::AppIdAlreadyExists
    } else {
        SkillRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
