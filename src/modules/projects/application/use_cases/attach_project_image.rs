use async_trait::async_trait;
use std::sync::Arc;

use crate::projects::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectView,
};
use crate::uploads::adapter::incoming::multipart::ReceivedFile;
use crate::uploads::application::domain::UploadKind;
use crate::uploads::application::ports::outgoing::{FileStore, FileStoreError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachProjectImageError {
    #[error("Project not found")]
    NotFound,

    #[error("Storage failed: {0}")]
    StorageError(String),

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for AttachProjectImageError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => AttachProjectImageError::NotFound,
            other => AttachProjectImageError::RepositoryError(other.to_string()),
        }
    }
}

impl From<FileStoreError> for AttachProjectImageError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::WriteFailed(msg) => AttachProjectImageError::StorageError(msg),
        }
    }
}

#[async_trait]
pub trait IAttachProjectImageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        file: ReceivedFile,
    ) -> Result<ProjectView, AttachProjectImageError>;
}

/// Resolves the project first (app id, then legacy internal id) so an
/// unknown id rejects before anything is written to disk. Then: store the
/// new file, persist the url, delete the previous image best-effort.
pub struct AttachProjectImageUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> AttachProjectImageUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IAttachProjectImageUseCase for AttachProjectImageUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        file: ReceivedFile,
    ) -> Result<ProjectView, AttachProjectImageError> {
        let resolved = self.repo.resolve(id).await?;
        let previous_url = resolved.view.image_url.clone();

        let stored = self
            .files
            .store(UploadKind::ProjectImage, &file.original_name, file.bytes)
            .await?;

        let updated = self
            .repo
            .set_image_url(resolved.internal_id, Some(stored.url.clone()))
            .await?;

        if let Some(old) = previous_url {
            if old != stored.url {
                self.files.remove(&old).await;
            }
        }

        Ok(updated)
    }
}
