use async_trait::async_trait;

use crate::about::application::ports::outgoing::{
    AboutPage, AboutRepository, AboutRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutError {
    #[error("Query failed: {0}")]
    RepositoryError(String),
}

impl From<AboutRepositoryError> for GetAboutError {
    fn from(err: AboutRepositoryError) -> Self {
        GetAboutError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IGetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutPage, GetAboutError>;
}

pub struct GetAboutUseCase<R>
where
    R: AboutRepository,
{
    repo: R,
}

impl<R> GetAboutUseCase<R>
where
    R: AboutRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetAboutUseCase for GetAboutUseCase<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self) -> Result<AboutPage, GetAboutError> {
        self.repo
            .get_or_initialize()
            .await
            .map_err(GetAboutError::from)
    }
}
