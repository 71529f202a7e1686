use async_trait::async_trait;
use uuid::Uuid;

use crate::skills::application::ports::outgoing::{
    SkillCategoryData, SkillCategoryView, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillCategoryError {
    #[error("Skill category id already exists")]
    IdAlreadyExists,

    #[error("Create failed: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for CreateSkillCategoryError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::AppIdAlreadyExists => CreateSkillCategoryError::IdAlreadyExists,
            other => CreateSkillCategoryError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ICreateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Option<String>,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, CreateSkillCategoryError>;
}

pub struct CreateSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    repo: R,
}

impl<R> CreateSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICreateSkillCategoryUseCase for CreateSkillCategoryUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Option<String>,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, CreateSkillCategoryError> {
        let app_id = id
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.repo
            .create(app_id, data)
            .await
            .map_err(CreateSkillCategoryError::from)
    }
}
