use async_trait::async_trait;
use serde::Serialize;

/// A skill category (e.g. "Cloud & DevOps") grouping individual skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategoryView {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub skills: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryData {
    pub title: String,
    pub icon: String,
    pub skills: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Skill category id already exists")]
    AppIdAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Explicit `order` first, then insertion order.
    async fn list(&self) -> Result<Vec<SkillCategoryView>, SkillRepositoryError>;

    async fn create(
        &self,
        app_id: String,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, SkillRepositoryError>;

    async fn update(
        &self,
        app_id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategoryView, SkillRepositoryError>;

    async fn delete(&self, app_id: &str) -> Result<(), SkillRepositoryError>;
}
