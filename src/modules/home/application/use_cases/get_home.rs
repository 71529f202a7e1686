use async_trait::async_trait;

use crate::home::application::ports::outgoing::{HomePage, HomeRepository, HomeRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHomeError {
    #[error("Query failed: {0}")]
    RepositoryError(String),
}

impl From<HomeRepositoryError> for GetHomeError {
    fn from(err: HomeRepositoryError) -> Self {
        match err {
            HomeRepositoryError::DatabaseError(msg) => GetHomeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IGetHomeUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, GetHomeError>;
}

/// Read-repair: the first read on an empty store creates the defaults.
pub struct GetHomeUseCase<R>
where
    R: HomeRepository,
{
    repo: R,
}

impl<R> GetHomeUseCase<R>
where
    R: HomeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetHomeUseCase for GetHomeUseCase<R>
where
    R: HomeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<HomePage, GetHomeError> {
        self.repo
            .get_or_initialize()
            .await
            .map_err(GetHomeError::from)
    }
}
