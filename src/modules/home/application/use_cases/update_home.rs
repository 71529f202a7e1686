use async_trait::async_trait;

use crate::home::application::ports::outgoing::{
    HomePage, HomeRepository, HomeRepositoryError, HomeUpdate,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateHomeError {
    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<HomeRepositoryError> for UpdateHomeError {
    fn from(err: HomeRepositoryError) -> Self {
        match err {
            HomeRepositoryError::DatabaseError(msg) => UpdateHomeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateHomeUseCase: Send + Sync {
    async fn execute(&self, update: HomeUpdate) -> Result<HomePage, UpdateHomeError>;
}

pub struct UpdateHomeUseCase<R>
where
    R: HomeRepository,
{
    repo: R,
}

impl<R> UpdateHomeUseCase<R>
where
    R: HomeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateHomeUseCase for UpdateHomeUseCase<R>
where
    R: HomeRepository + Send + Sync,
{
    async fn execute(&self, update: HomeUpdate) -> Result<HomePage, UpdateHomeError> {
        self.repo.upsert(update).await.map_err(UpdateHomeError::from)
    }
}
