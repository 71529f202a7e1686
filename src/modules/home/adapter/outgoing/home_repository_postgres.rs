use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::home::application::ports::outgoing::{
    HomePage, HomeRepository, HomeRepositoryError, HomeUpdate,
};

pub const HOME_KEY: &str = "home";

const DEFAULT_NAME: &str = "Your Name";
const DEFAULT_TAGLINE: &str = "Full Stack Developer specializing in building exceptional \
     digital experiences. I create elegant, performant, and accessible web applications.";

#[derive(Debug, Clone)]
pub struct HomeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HomeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_active_model() -> ActiveModel {
        let now = Utc::now().fixed_offset();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(HOME_KEY.to_string()),
            name: Set(DEFAULT_NAME.to_string()),
            tagline: Set(DEFAULT_TAGLINE.to_string()),
            resume_url: Set(None),
            photo_url: Set(None),
            available_for_opportunities: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    async fn find_existing(&self) -> Result<Option<HomePage>, HomeRepositoryError> {
        let found = Entity::find()
            .filter(Column::Key.eq(HOME_KEY))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }
}

#[async_trait]
impl HomeRepository for HomeRepositoryPostgres {
    async fn get_or_initialize(&self) -> Result<HomePage, HomeRepositoryError> {
        if let Some(existing) = self.find_existing().await? {
            return Ok(existing);
        }

        // First read on an empty store: create the defaults. A concurrent
        // first read may win the race; the unique key index turns that into
        // RecordNotInserted and we fall through to the reselect.
        let inserted = Entity::insert(Self::default_active_model())
            .on_conflict(OnConflict::column(Column::Key).do_nothing().to_owned())
            .exec_with_returning(&*self.db)
            .await;

        match inserted {
            Ok(model) => Ok(model.to_domain()),
            Err(DbErr::RecordNotInserted) => self
                .find_existing()
                .await?
                .ok_or_else(|| HomeRepositoryError::DatabaseError("lost upsert race".into())),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn upsert(&self, update: HomeUpdate) -> Result<HomePage, HomeRepositoryError> {
        let mut model = Self::default_active_model();
        model.name = Set(update.name);
        model.tagline = Set(update.tagline);
        model.available_for_opportunities = Set(update.available_for_opportunities);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([
                        Column::Name,
                        Column::Tagline,
                        Column::AvailableForOpportunities,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn set_resume_url(
        &self,
        url: Option<String>,
    ) -> Result<HomePage, HomeRepositoryError> {
        let mut model = Self::default_active_model();
        model.resume_url = Set(url);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::ResumeUrl, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn set_photo_url(&self, url: Option<String>) -> Result<HomePage, HomeRepositoryError> {
        let mut model = Self::default_active_model();
        model.photo_url = Set(url);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::PhotoUrl, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.to_domain())
    }
}

fn map_db_err(e: DbErr) -> HomeRepositoryError {
    HomeRepositoryError::DatabaseError(e.to_string())
}
