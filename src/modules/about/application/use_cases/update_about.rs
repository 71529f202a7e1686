use async_trait::async_trait;

use crate::about::application::ports::outgoing::{
    AboutPage, AboutRepository, AboutRepositoryError, AboutUpdate,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAboutError {
    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<AboutRepositoryError> for UpdateAboutError {
    fn from(err: AboutRepositoryError) -> Self {
        UpdateAboutError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IUpdateAboutUseCase: Send + Sync {
    async fn execute(&self, update: AboutUpdate) -> Result<AboutPage, UpdateAboutError>;
}

pub struct UpdateAboutUseCase<R>
where
    R: AboutRepository,
{
    repo: R,
}

impl<R> UpdateAboutUseCase<R>
where
    R: AboutRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateAboutUseCase for UpdateAboutUseCase<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, update: AboutUpdate) -> Result<AboutPage, UpdateAboutError> {
        self.repo.upsert(update).await.map_err(UpdateAboutError::from)
    }
}
