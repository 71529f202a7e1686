use async_trait::async_trait;

use crate::skills::application::ports::outgoing::{
    SkillCategoryView, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillRepositoryError> for GetSkillsError {
    fn from(err: SkillRepositoryError) -> Self {
        GetSkillsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait IGetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError>;
}

pub struct GetSkillsUseCase<R>
where
    R: SkillRepository,
{
    repo: R,
}

impl<R> GetSkillsUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetSkillsUseCase for GetSkillsUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError> {
        self.repo.list().await.map_err(GetSkillsError::from)
    }
}
