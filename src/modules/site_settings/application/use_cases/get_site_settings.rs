use async_trait::async_trait;

use crate::site_settings::application::ports::outgoing::{
    SiteSettings, SiteSettingsRepository, SiteSettingsRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSiteSettingsError {
    #[error("Query failed: {0}")]
    RepositoryError(String),
}

impl From<SiteSettingsRepositoryError> for GetSiteSettingsError {
    fn from(err: SiteSettingsRepositoryError) -> Self {
        GetSiteSettingsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IGetSiteSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError>;
}

pub struct GetSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository,
{
    repo: R,
}

impl<R> GetSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetSiteSettingsUseCase for GetSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError> {
        self.repo
            .get_or_initialize()
            .await
            .map_err(GetSiteSettingsError::from)
    }
}
