use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub bio: String,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone)]
pub struct AboutUpdate {
    pub bio: String,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Read the singleton, lazily creating the documented defaults.
    async fn get_or_initialize(&self) -> Result<AboutPage, AboutRepositoryError>;

    /// Replace bio and education, creating the row if absent.
    async fn upsert(&self, update: AboutUpdate) -> Result<AboutPage, AboutRepositoryError>;
}
