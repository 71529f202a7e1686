use async_trait::async_trait;

use crate::profiles::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, ProfileView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfilesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileRepositoryError> for GetProfilesError {
    fn from(err: ProfileRepositoryError) -> Self {
        GetProfilesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait IGetProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError>;
}

pub struct GetProfilesUseCase<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> GetProfilesUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetProfilesUseCase for GetProfilesUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError> {
        self.repo.list().await.map_err(GetProfilesError::from)
    }
}
