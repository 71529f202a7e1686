use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::projects::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, ProjectView, ResolvedProject,
    UpdateProjectData,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_app_id(
        &self,
        app_id: &str,
    ) -> Result<Option<sea_orm_entity::Model>, ProjectRepositoryError> {
        Entity::find()
            .filter(Column::AppId.eq(app_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectView>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::Featured)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_view).collect()
    }

    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            app_id: Set(data.app_id.trim().to_string()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            technologies: Set(to_json(&data.technologies)?),
            live_url: Set(data.live_url),
            github_url: Set(data.github_url),
            featured: Set(data.featured),
            image_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_app_id_error)?;

        model_to_view(inserted)
    }

    async fn update(
        &self,
        app_id: &str,
        data: UpdateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.title = Set(data.title.trim().to_string());
        model.description = Set(data.description);
        model.technologies = Set(to_json(&data.technologies)?);
        model.live_url = Set(data.live_url);
        model.github_url = Set(data.github_url);
        model.featured = Set(data.featured);
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
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_view(updated)
    }

    async fn delete(&self, app_id: &str) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::AppId.eq(app_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn resolve(&self, id: &str) -> Result<ResolvedProject, ProjectRepositoryError> {
        if let Some(model) = self.find_by_app_id(id).await? {
            let internal_id = model.id;
            return Ok(ResolvedProject {
                internal_id,
                view: model_to_view(model)?,
            });
        }

        // Legacy fallback: rows created before application ids existed are
        // addressed by their internal row id.
        if let Ok(internal) = Uuid::parse_str(id) {
            if let Some(model) = Entity::find_by_id(internal)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
            {
                return Ok(ResolvedProject {
                    internal_id: model.id,
                    view: model_to_view(model)?,
                });
            }
        }

        Err(ProjectRepositoryError::NotFound)
    }

    async fn set_image_url(
        &self,
        internal_id: Uuid,
        url: Option<String>,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let existing = Entity::find_by_id(internal_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.image_url = Set(url);
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        model_to_view(updated)
    }
}

fn model_to_view(model: sea_orm_entity::Model) -> Result<ProjectView, ProjectRepositoryError> {
    Ok(ProjectView {
        id: model.app_id,
        title: model.title,
        description: model.description,
        technologies: from_json(&model.technologies)?,
        live_url: model.live_url,
        github_url: model.github_url,
        featured: model.featured,
        image_url: model.image_url,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_app_id_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        ProjectRepositoryError::AppIdAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
