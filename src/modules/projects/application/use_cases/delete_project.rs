use async_trait::async_trait;

use crate::projects::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for DeleteProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            other => DeleteProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, app_id: &str) -> Result<(), DeleteProjectError>;
}

/// Removes the record only; the project image file, if any, stays on disk
/// unless the image endpoint deleted it first.
pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IDeleteProjectUseCase for DeleteProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, app_id: &str) -> Result<(), DeleteProjectError> {
        self.repo
            .delete(app_id)
            .await
            .map_err(DeleteProjectError::from)
    }
}
