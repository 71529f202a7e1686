use async_trait::async_trait;
use std::sync::Arc;

use crate::home::application::ports::outgoing::{HomePage, HomeRepository, HomeRepositoryError};
use crate::uploads::adapter::incoming::multipart::ReceivedFile;
use crate::uploads::application::domain::UploadKind;
use crate::uploads::application::ports::outgoing::{FileStore, FileStoreError};

/// Which of the two file-bearing fields on the Home singleton is targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFileSlot {
    Resume,
    Photo,
}

impl HomeFileSlot {
    pub fn upload_kind(&self) -> UploadKind {
        match self {
            HomeFileSlot::Resume => UploadKind::Resume,
            HomeFileSlot::Photo => UploadKind::Photo,
        }
    }

    fn current_url(&self, home: &HomePage) -> Option<String> {
        match self {
            HomeFileSlot::Resume => home.resume_url.clone(),
            HomeFileSlot::Photo => home.photo_url.clone(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachHomeFileError {
    #[error("Storage failed: {0}")]
    StorageError(String),

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<HomeRepositoryError> for AttachHomeFileError {
    fn from(err: HomeRepositoryError) -> Self {
        match err {
            HomeRepositoryError::DatabaseError(msg) => AttachHomeFileError::RepositoryError(msg),
        }
    }
}

impl From<FileStoreError> for AttachHomeFileError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::WriteFailed(msg) => AttachHomeFileError::StorageError(msg),
        }
    }
}

#[async_trait]
pub trait IAttachHomeFileUseCase: Send + Sync {
    async fn execute(
        &self,
        slot: HomeFileSlot,
        file: ReceivedFile,
    ) -> Result<HomePage, AttachHomeFileError>;
}

/// Persist-new-then-delete-old: the record points at the fresh file before
/// the stale one is removed, so a crash leaves an orphan file rather than a
/// dangling reference. Removal is fire-and-forget.
pub struct AttachHomeFileUseCase<R>
where
    R: HomeRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> AttachHomeFileUseCase<R>
where
    R: HomeRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IAttachHomeFileUseCase for AttachHomeFileUseCase<R>
where
    R: HomeRepository + Send + Sync,
{
    async fn execute(
        &self,
        slot: HomeFileSlot,
        file: ReceivedFile,
    ) -> Result<HomePage, AttachHomeFileError> {
        let current = self.repo.get_or_initialize().await?;
        let previous_url = slot.current_url(&current);

        let stored = self
            .files
            .store(slot.upload_kind(), &file.original_name, file.bytes)
            .await?;

        let updated = match slot {
            HomeFileSlot::Resume => self.repo.set_resume_url(Some(stored.url.clone())).await?,
            HomeFileSlot::Photo => self.repo.set_photo_url(Some(stored.url.clone())).await?,
        };

        if let Some(old) = previous_url {
            if old != stored.url {
                self.files.remove(&old).await;
            }
        }

        Ok(updated)
    }
}
