use async_trait::async_trait;
use serde::Serialize;

/// An external coding/social profile card (GitHub, LeetCode, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub username: String,
    pub url: String,
    pub stats: Option<String>,
    pub description: Option<String>,
    pub color: String,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct ProfileData {
    pub name: String,
    pub username: String,
    pub url: String,
    pub stats: Option<String>,
    pub description: Option<String>,
    pub color: String,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Profile id already exists")]
    AppIdAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Explicit `order` first, then insertion order.
    async fn list(&self) -> Result<Vec<ProfileView>, ProfileRepositoryError>;

    async fn create(
        &self,
        app_id: String,
        data: ProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError>;

    async fn update(
        &self,
        app_id: &str,
        data: ProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError>;

    async fn delete(&self, app_id: &str) -> Result<(), ProfileRepositoryError>;
}
