use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::certificates::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError, CertificateUpdate, CertificateView,
    NewCertificateRecord,
};

#[derive(Debug, Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn list(&self) -> Result<Vec<CertificateView>, CertificateRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<CertificateView, CertificateRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificateRepositoryError::NotFound)?;

        Ok(model_to_view(model))
    }

    async fn insert(
        &self,
        record: NewCertificateRecord,
    ) -> Result<CertificateView, CertificateRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(record.title.trim().to_string()),
            issuer: Set(record.issuer.trim().to_string()),
            file_url: Set(record.file_url),
            file_type: Set(record.file_type),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_view(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        update: CertificateUpdate,
    ) -> Result<CertificateView, CertificateRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificateRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title.trim().to_string());
        }
        if let Some(issuer) = update.issuer {
            model.issuer = Set(issuer.trim().to_string());
        }
        if let Some((url, file_type)) = update.file {
            model.file_url = Set(url);
            model.file_type = Set(file_type);
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_view(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_view(model: sea_orm_entity::Model) -> CertificateView {
    CertificateView {
        id: model.id.to_string(),
        title: model.title,
        issuer: model.issuer,
        file_url: model.file_url,
        file_type: model.file_type,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}
