use async_trait::async_trait;

use crate::skills::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillCategoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for DeleteSkillCategoryError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => DeleteSkillCategoryError::NotFound,
            other => DeleteSkillCategoryError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IDeleteSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, app_id: &str) -> Result<(), DeleteSkillCategoryError>;
}

pub struct DeleteSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    repo: R,
}

impl<R> DeleteSkillCategoryUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IDeleteSkillCategoryUseCase for DeleteSkillCategoryUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, app_id: &str) -> Result<(), DeleteSkillCategoryError> {
        self.repo
            .delete(app_id)
            .await
            .map_err(DeleteSkillCategoryError::from)
    }
}
