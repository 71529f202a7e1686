use async_trait::async_trait;

use crate::profiles::application::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileRepositoryError, ProfileView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpdateProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
            other => UpdateProfileError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        app_id: &str,
        data: ProfileData,
    ) -> Result<ProfileView, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        app_id: &str,
        data: ProfileData,
    ) -> Result<ProfileView, UpdateProfileError> {
        self.repo
            .update(app_id, data)
            .await
            .map_err(UpdateProfileError::from)
    }
}
