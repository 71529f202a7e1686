use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// A project as clients see it. `id` is the application id, never the
/// storage row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub app_id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateProjectData {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

/// Outcome of the two-step id resolution; carries the internal row id so
/// follow-up writes can address the row directly.
#[derive(Debug, Clone)]
pub struct ResolvedProject {
    pub internal_id: Uuid,
    pub view: ProjectView,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Project id already exists")]
    AppIdAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Featured first, then insertion order.
    async fn list(&self) -> Result<Vec<ProjectView>, ProjectRepositoryError>;

    async fn create(&self, data: CreateProjectData)
        -> Result<ProjectView, ProjectRepositoryError>;

    /// Update/delete address the application id only.
    async fn update(
        &self,
        app_id: &str,
        data: UpdateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    async fn delete(&self, app_id: &str) -> Result<(), ProjectRepositoryError>;

    /// Two-step lookup: try the application-id match; on miss, try the
    /// internal row id (legacy rows predating application ids); on both
    /// miss, NotFound.
    async fn resolve(&self, id: &str) -> Result<ResolvedProject, ProjectRepositoryError>;

    async fn set_image_url(
        &self,
        internal_id: Uuid,
        url: Option<String>,
    ) -> Result<ProjectView, ProjectRepositoryError>;
}
