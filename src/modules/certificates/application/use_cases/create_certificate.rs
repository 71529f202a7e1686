use async_trait::async_trait;
use std::sync::Arc;

use crate::certificates::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError, CertificateView, NewCertificateRecord,
};
use crate::uploads::adapter::incoming::multipart::ReceivedFile;
use crate::uploads::application::domain::UploadKind;
use crate::uploads::application::ports::outgoing::{FileStore, FileStoreError};

/// `application/pdf` renders as an embedded document, anything else the
/// policy lets through is an image.
pub fn file_type_for(content_type: &str) -> &'static str {
    if content_type == "application/pdf" {
        "pdf"
    } else {
        "image"
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCertificateError {
    #[error("Title and issuer are required")]
    MissingFields,

    #[error("Storage failed: {0}")]
    StorageError(String),

    #[error("Create failed: {0}")]
    RepositoryError(String),
}

impl From<CertificateRepositoryError> for CreateCertificateError {
    fn from(err: CertificateRepositoryError) -> Self {
        CreateCertificateError::RepositoryError(err.to_string())
    }
}

impl From<FileStoreError> for CreateCertificateError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::WriteFailed(msg) => CreateCertificateError::StorageError(msg),
        }
    }
}

#[async_trait]
pub trait ICreateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        title: String,
        issuer: String,
        file: ReceivedFile,
    ) -> Result<CertificateView, CreateCertificateError>;
}

/// Field validation happens before the file reaches disk, so a rejected
/// request retains nothing.
pub struct CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> ICreateCertificateUseCase for CreateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        title: String,
        issuer: String,
        file: ReceivedFile,
    ) -> Result<CertificateView, CreateCertificateError> {
        if title.trim().is_empty() || issuer.trim().is_empty() {
            return Err(CreateCertificateError::MissingFields);
        }

        let file_type = file_type_for(&file.content_type).to_string();

        let stored = self
            .files
            .store(UploadKind::CertificateFile, &file.original_name, file.bytes)
            .await?;

        self.repo
            .insert(NewCertificateRecord {
                title,
                issuer,
                file_url: stored.url,
                file_type,
            })
            .await
            .map_err(CreateCertificateError::from)
    }
}
