use async_trait::async_trait;

use crate::skills::application::ports::outgoing::{
    SkillCategoryData, SkillCategoryView, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillCategoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for UpdateSkillCategoryError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => UpdateSkillCategoryError::NotFound,
            other => UpdateSkillCategoryError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        app_id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, UpdateSkillCategoryError>;
}

pub struct UpdateSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    repo: R,
}

impl<R> UpdateSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateSkillCategoryUseCase for UpdateSkillCategoryUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        app_id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, UpdateSkillCategoryError> {
        self.repo
            .update(app_id, data)
            .await
            .map_err(UpdateSkillCategoryError::from)
    }
}
