use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::certificates::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError, CertificateView,
};
use crate::uploads::application::ports::outgoing::FileStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    RepositoryError(String),
}

impl From<CertificateRepositoryError> for DeleteCertificateError {
    fn from(err: CertificateRepositoryError) -> Self {
        match err {
            CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
            other => DeleteCertificateError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IDeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteCertificateError>;
}

/// Removes the record, then the file (best-effort).
pub struct DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IDeleteCertificateUseCase for DeleteCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteCertificateError> {
        let internal_id = Uuid::parse_str(id).map_err(|_| DeleteCertificateError::NotFound)?;

        let existing: CertificateView = self.repo.find_by_id(internal_id).await?;

        self.repo.delete(internal_id).await?;
        self.files.remove(&existing.file_url).await;

        Ok(())
    }
}
