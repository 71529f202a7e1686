use async_trait::async_trait;

use crate::projects::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectRepositoryError> for GetProjectsError {
    fn from(err: ProjectRepositoryError) -> Self {
        GetProjectsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait IGetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError>;
}

pub struct GetProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> GetProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetProjectsUseCase for GetProjectsUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        self.repo.list().await.map_err(GetProjectsError::from)
    }
}
