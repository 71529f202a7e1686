use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::contact::application::ports::outgoing::{
    ContactDetails, ContactRepository, ContactRepositoryError, ContactUpdate, SocialLinks,
};

pub const CONTACT_KEY: &str = "contact";

const DEFAULT_EMAIL: &str = "your.email@example.com";
const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
const DEFAULT_LOCATION: &str = "San Francisco, CA";

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_active_model() -> ActiveModel {
        let now = Utc::now().fixed_offset();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(CONTACT_KEY.to_string()),
            email: Set(DEFAULT_EMAIL.to_string()),
            phone: Set(Some(DEFAULT_PHONE.to_string())),
            location: Set(Some(DEFAULT_LOCATION.to_string())),
            description: Set(None),
            social_links: Set(serde_json::json!({})),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    async fn find_existing(&self) -> Result<Option<ContactDetails>, ContactRepositoryError> {
        let found = Entity::find()
            .filter(Column::Key.eq(CONTACT_KEY))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_domain).transpose()
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn get_or_initialize(&self) -> Result<ContactDetails, ContactRepositoryError> {
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
                .ok_or_else(|| ContactRepositoryError::DatabaseError("lost upsert race".into())),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn upsert(
        &self,
        update: ContactUpdate,
    ) -> Result<ContactDetails, ContactRepositoryError> {
        let mut model = Self::default_active_model();
        model.email = Set(update.email);
        model.phone = Set(update.phone);
        model.location = Set(update.location);
        model.description = Set(update.description);
        model.social_links = Set(to_json(&update.social_links)?);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([
                        Column::Email,
                        Column::Phone,
                        Column::Location,
                        Column::Description,
                        Column::SocialLinks,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_domain(updated)
    }
}

fn model_to_domain(model: Model) -> Result<ContactDetails, ContactRepositoryError> {
    let social_links: SocialLinks = serde_json::from_value(model.social_links.clone())
        .map_err(|e| ContactRepositoryError::SerializationError(e.to_string()))?;

    Ok(ContactDetails {
        email: model.email,
        phone: model.phone,
        location: model.location,
        description: model.description,
        social_links,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ContactRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ContactRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
