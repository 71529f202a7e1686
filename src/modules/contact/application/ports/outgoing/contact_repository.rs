use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get_or_initialize(&self) -> Result<ContactDetails, ContactRepositoryError>;

    async fn upsert(&self, update: ContactUpdate)
        -> Result<ContactDetails, ContactRepositoryError>;
}
