use async_trait::async_trait;

use crate::profiles::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for DeleteProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
            other => DeleteProfileError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IDeleteProfileUseCase: Send + Sync {
    async fn execute(&self, app_id: &str) -> Result<(), DeleteProfileError>;
}

pub struct DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IDeleteProfileUseCase for DeleteProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, app_id: &str) -> Result<(), DeleteProfileError> {
        self.repo
            .delete(app_id)
            .await
            .map_err(DeleteProfileError::from)
    }
}
