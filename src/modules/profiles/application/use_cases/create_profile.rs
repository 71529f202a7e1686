use async_trait::async_trait;
use uuid::Uuid;

use crate::profiles::application::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileRepositoryError, ProfileView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile id already exists")]
    IdAlreadyExists,

    #[error("Create failed: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for CreateProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::AppIdAlreadyExists => CreateProfileError::IdAlreadyExists,
            other => CreateProfileError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ICreateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Option<String>,
        data: ProfileData,
    ) -> Result<ProfileView, CreateProfileError>;
}

pub struct CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICreateProfileUseCase for CreateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Option<String>,
        data: ProfileData,
    ) -> Result<ProfileView, CreateProfileError> {
        let app_id = id
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.repo
            .create(app_id, data)
            .await
            .map_err(CreateProfileError::from)
    }
}
