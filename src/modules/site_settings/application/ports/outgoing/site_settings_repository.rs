use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub footer_links: FooterLinks,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteSettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    async fn get_or_initialize(&self) -> Result<SiteSettings, SiteSettingsRepositoryError>;

    async fn upsert(
        &self,
        footer_links: FooterLinks,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError>;
}
