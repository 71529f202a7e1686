use async_trait::async_trait;
use serde::Serialize;

/// The hero-section singleton as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub name: String,
    pub tagline: String,
    pub resume_url: Option<String>,
    pub photo_url: Option<String>,
    pub available_for_opportunities: bool,
}

/// Fields the PUT endpoint may replace. File URLs are owned by the upload
/// endpoints and never pass through here.
#[derive(Debug, Clone)]
pub struct HomeUpdate {
    pub name: String,
    pub tagline: String,
    pub available_for_opportunities: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HomeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait HomeRepository: Send + Sync {
    /// Read the singleton, lazily creating it with the documented defaults.
    /// Concurrent first reads must not produce duplicates; the unique key
    /// index backs this, not application-level locking.
    async fn get_or_initialize(&self) -> Result<HomePage, HomeRepositoryError>;

    /// Replace the editable fields, creating the row if it does not exist.
    async fn upsert(&self, update: HomeUpdate) -> Result<HomePage, HomeRepositoryError>;

    async fn set_resume_url(&self, url: Option<String>)
        -> Result<HomePage, HomeRepositoryError>;

    async fn set_photo_url(&self, url: Option<String>) -> Result<HomePage, HomeRepositoryError>;
}
