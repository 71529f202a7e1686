use async_trait::async_trait;
use std::sync::Arc;

use crate::projects::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectView,
};
use crate::uploads::application::ports::outgoing::FileStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveProjectImageError {
    #[error("Project not found")]
    NotFound,

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for RemoveProjectImageError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => RemoveProjectImageError::NotFound,
            other => RemoveProjectImageError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IRemoveProjectImageUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<ProjectView, RemoveProjectImageError>;
}

pub struct RemoveProjectImageUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> RemoveProjectImageUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { repo, files }
    }
}

#[async_trait]
impl<R> IRemoveProjectImageUseCase for RemoveProjectImageUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<ProjectView, RemoveProjectImageError> {
        let resolved = self.repo.resolve(id).await?;
        let previous_url = resolved.view.image_url.clone();

        let updated = self.repo.set_image_url(resolved.internal_id, None).await?;

        if let Some(old) = previous_url {
            self.files.remove(&old).await;
        }

        Ok(updated)
    }
}
