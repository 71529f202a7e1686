use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::site_settings::application::ports::outgoing::{
    FooterLinks, SiteSettings, SiteSettingsRepository, SiteSettingsRepositoryError,
};

pub const SITE_SETTINGS_KEY: &str = "site-settings";

#[derive(Debug, Clone)]
pub struct SiteSettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteSettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_footer_links() -> FooterLinks {
        FooterLinks {
            github: Some("https://github.com".to_string()),
            linkedin: Some("https://www.linkedin.com".to_string()),
            twitter: Some("https://twitter.com".to_string()),
            email: Some("mailto:your.email@example.com".to_string()),
        }
    }

    fn default_active_model() -> Result<ActiveModel, SiteSettingsRepositoryError> {
        let now = Utc::now().fixed_offset();

        Ok(ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(SITE_SETTINGS_KEY.to_string()),
            footer_links: Set(to_json(&Self::default_footer_links())?),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }

    async fn find_existing(&self) -> Result<Option<SiteSettings>, SiteSettingsRepositoryError> {
        let found = Entity::find()
            .filter(Column::Key.eq(SITE_SETTINGS_KEY))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_domain).transpose()
    }
}

#[async_trait]
impl SiteSettingsRepository for SiteSettingsRepositoryPostgres {
    async fn get_or_initialize(&self) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        if let Some(existing) = self.find_existing().await? {
            return Ok(existing);
        }

        let inserted = Entity::insert(Self::default_active_model()?)
            .on_conflict(OnConflict::column(Column::Key).do_nothing().to_owned())
            .exec_with_returning(&*self.db)
            .await;

        match inserted {
            Ok(model) => model_to_domain(model),
            Err(DbErr::RecordNotInserted) => self.find_existing().await?.ok_or_else(|| {
                SiteSettingsRepositoryError::DatabaseError("lost upsert race".into())
            }),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn upsert(
        &self,
        footer_links: FooterLinks,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        let mut model = Self::default_active_model()?;
        model.footer_links = Set(to_json(&footer_links)?);

        let updated = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::FooterLinks, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_domain(updated)
    }
}

fn model_to_domain(model: Model) -> Result<SiteSettings, SiteSettingsRepositoryError> {
    let footer_links: FooterLinks = serde_json::from_value(model.footer_links.clone())
        .map_err(|e| SiteSettingsRepositoryError::SerializationError(e.to_string()))?;

    Ok(SiteSettings { footer_links })
}

fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, SiteSettingsRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| SiteSettingsRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> SiteSettingsRepositoryError {
    SiteSettingsRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn default_model() -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            key: SITE_SETTINGS_KEY.to_string(),
            footer_links: serde_json::to_value(
                SiteSettingsRepositoryPostgres::default_footer_links(),
            )
            .unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_or_initialize_creates_placeholder_links() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![vec![default_model()]])
            .into_connection();

        let repo = SiteSettingsRepositoryPostgres::new(Arc::new(db));
        let settings = repo.get_or_initialize().await.unwrap();

        assert!(settings
            .footer_links
            .github
            .as_deref()
            .unwrap()
            .starts_with("https://"));
        assert!(settings
            .footer_links
            .email
            .as_deref()
            .unwrap()
            .starts_with("mailto:"));
    }

    #[tokio::test]
    async fn test_upsert_replaces_links() {
        let mut updated = default_model();
        updated.footer_links = serde_json::json!({"github": "https://github.com/owner"});

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = SiteSettingsRepositoryPostgres::new(Arc::new(db));
        let settings = repo
            .upsert(FooterLinks {
                github: Some("https://github.com/owner".to_string()),
                ..FooterLinks::default()
            })
            .await
            .unwrap();

        assert_eq!(
            settings.footer_links.github.as_deref(),
            Some("https://github.com/owner")
        );
        assert_eq!(settings.footer_links.twitter, None);
    }
}
