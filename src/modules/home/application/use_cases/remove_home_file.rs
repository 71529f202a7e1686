use async_trait::async_trait;
use std::sync::Arc;

use super::attach_home_file::HomeFileSlot;
use crate::home::application::ports::outgoing::{HomePage, HomeRepository, HomeRepositoryError};
use crate::uploads::application::ports::outgoing::FileStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveHomeFileError {
    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<HomeRepositoryError> for RemoveHomeFileError {
    fn from(err: HomeRepositoryError) -> Self {
        match err {
            HomeRepositoryError::DatabaseError(msg) => RemoveHomeFileError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IRemoveHomeFileUseCase: Send + Sync {
    async fn execute(&self, slot: HomeFileSlot) -> Result<HomePage, RemoveHomeFileError>;
}

/// Clears the reference field first, then removes the file from disk
/// (best-effort; an already-missing file is fine).
pub struct RemoveHomeFileUseCase<R>
where
    R: HomeRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> RemoveHomeFileUseCase<R>
where
    R: HomeRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IRemoveHomeFileUseCase for RemoveHomeFileUseCase<R>
where
    R: HomeRepository + Send + Sync,
{
    async fn execute(&self, slot: HomeFileSlot) -> Result<HomePage, RemoveHomeFileError> {
        let current = self.repo.get_or_initialize().await?;

        let previous_url = match slot {
            HomeFileSlot::Resume => current.resume_url.clone(),
            HomeFileSlot::Photo => current.photo_url.clone(),
        };

        let updated = match slot {
            HomeFileSlot::Resume => self.repo.set_resume_url(None).await?,
            HomeFileSlot::Photo => self.repo.set_photo_url(None).await?,
        };

        if let Some(old) = previous_url {
            self.files.remove(&old).await;
        }

        Ok(updated)
    }
}
