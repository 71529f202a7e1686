use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::create_certificate::file_type_for;
use crate::certificates::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError, CertificateUpdate, CertificateView,
};
use crate::uploads::adapter::incoming::multipart::ReceivedFile;
use crate::uploads::application::domain::UploadKind;
use crate::uploads::application::ports::outgoing::{FileStore, FileStoreError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Storage failed: {0}")]
    StorageError(String),

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<CertificateRepositoryError> for UpdateCertificateError {
    fn from(err: CertificateRepositoryError) -> Self {
        match err {
            CertificateRepositoryError::NotFound => UpdateCertificateError::NotFound,
            other => UpdateCertificateError::RepositoryError(other.to_string()),
        }
    }
}

impl From<FileStoreError> for UpdateCertificateError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::WriteFailed(msg) => UpdateCertificateError::StorageError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        title: Option<String>,
        issuer: Option<String>,
        file: Option<ReceivedFile>,
    ) -> Result<CertificateView, UpdateCertificateError>;
}

/// Certificates are addressed by their generated internal id. A new file
/// replaces url and type together and removes the superseded file from disk
/// after the record is persisted.
pub struct UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IUpdateCertificateUseCase for UpdateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        title: Option<String>,
        issuer: Option<String>,
        file: Option<ReceivedFile>,
    ) -> Result<CertificateView, UpdateCertificateError> {
        let internal_id = Uuid::parse_str(id).map_err(|_| UpdateCertificateError::NotFound)?;

        let existing = self.repo.find_by_id(internal_id).await?;
        let previous_url = existing.file_url.clone();

        let mut update = CertificateUpdate {
            title,
            issuer,
            file: None,
        };

        let mut replaced_file = false;
        if let Some(file) = file {
            let file_type = file_type_for(&file.content_type).to_string();
            let stored = self
                .files
                .store(UploadKind::CertificateFile, &file.original_name, file.bytes)
                .await?;
            update.file = Some((stored.url, file_type));
            replaced_file = true;
        }

        let updated = self.repo.update(internal_id, update).await?;

        if replaced_file && previous_url != updated.file_url {
            self.files.remove(&previous_url).await;
        }

        Ok(updated)
    }
}
