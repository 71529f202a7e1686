use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::about::application::ports::outgoing::{
    AboutPage, AboutRepository, AboutRepositoryError, AboutUpdate, EducationEntry,
};

pub const ABOUT_KEY: &str = "about";

const DEFAULT_BIO: &str = "I'm a Full Stack Developer with over 5 years of experience building \
     web applications that make a difference.";

#[derive(Debug, Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_active_model() -> ActiveModel {
        let now = Utc::now().fixed_offset();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(ABOUT_KEY.to_string()),
            bio: Set(DEFAULT_BIO.to_string()),
            education: Set(serde_json::json!([])),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    async fn find_existing(&self) -> Result<Option<AboutPage>, AboutRepositoryError> {
        let found = Entity::find()
            .filter(Column::Key.eq(ABOUT_KEY))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_domain).transpose()
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn get_or_initialize(&self) -> Result<AboutPage, AboutRepositoryError> {
        if let Some(existing) = self.find_existing().await? {
            return Ok(existing);
        }

        let inserted = Entity::insert(Self::default_active_model())
            .on_conflict(OnConflict::column(Column::Key).do_nothing().to_owned())
            .exec_with_returning(&*self.db)
            .await;

        match inserted {
            Ok(model) => model_to_domain(model),
            Err(DbErr::RecordNotInserted) => self
                .find_existing()
                .await?
                .ok_or_else(|| AboutRepositoryError::DatabaseError("lost upsert race".into())),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn upsert(&self, update: AboutUpdate) -> Result<AboutPage, AboutRepositoryError> {
        let mut model = Self::default_active_model();
        model.bio = Set(update.bio);
        model.education = Set(to_json(&update.education)?);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Bio, Column::Education, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_domain(updated)
    }
}

fn model_to_domain(model: Model) -> Result<AboutPage, AboutRepositoryError> {
    Ok(AboutPage {
        bio: model.bio,
        education: from_json(&model.education)?,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, AboutRepositoryError> {
    serde_json::to_value(data).map_err(|e| AboutRepositoryError::SerializationError(e.to_string()))
}

fn from_json(json: &serde_json::Value) -> Result<Vec<EducationEntry>, AboutRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| AboutRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}
