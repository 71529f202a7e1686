use async_trait::async_trait;

use crate::projects::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectView, UpdateProjectData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            other => UpdateProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        app_id: &str,
        data: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError>;
}

pub struct UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateProjectUseCase for UpdateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        app_id: &str,
        data: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError> {
        self.repo
            .update(app_id, data)
            .await
            .map_err(UpdateProjectError::from)
    }
}
