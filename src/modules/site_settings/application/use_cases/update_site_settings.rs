use async_trait::async_trait;

use crate::site_settings::application::ports::outgoing::{
    FooterLinks, SiteSettings, SiteSettingsRepository, SiteSettingsRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSiteSettingsError {
    #[error("{0} URL must start with http")]
    InvalidUrl(&'static str),

    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<SiteSettingsRepositoryError> for UpdateSiteSettingsError {
    fn from(err: SiteSettingsRepositoryError) -> Self {
        UpdateSiteSettingsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IUpdateSiteSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        footer_links: FooterLinks,
    ) -> Result<SiteSettings, UpdateSiteSettingsError>;
}

/// Footer URL fields must start with `http`; the email link is auto-prefixed
/// with `mailto:` when the scheme is missing.
pub struct UpdateSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository,
{
    repo: R,
}

impl<R> UpdateSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn normalize(links: FooterLinks) -> Result<FooterLinks, UpdateSiteSettingsError> {
        for (field, value) in [
            ("GitHub", &links.github),
            ("LinkedIn", &links.linkedin),
            ("Twitter", &links.twitter),
        ] {
            if let Some(url) = value {
                if !url.starts_with("http") {
                    return Err(UpdateSiteSettingsError::InvalidUrl(field));
                }
            }
        }

        let FooterLinks {
            github,
            linkedin,
            twitter,
            email,
        } = links;

        let email = email.map(|address| {
            if address.starts_with("mailto:") {
                address
            } else {
                format!("mailto:{address}")
            }
        });

        Ok(FooterLinks {
            github,
            linkedin,
            twitter,
            email,
        })
    }
}

#[async_trait]
impl<R> IUpdateSiteSettingsUseCase for UpdateSiteSettingsUseCase<R>
where
    R: SiteSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        footer_links: FooterLinks,
    ) -> Result<SiteSettings, UpdateSiteSettingsError> {
        let normalized = Self::normalize(footer_links)?;

        self.repo
            .upsert(normalized)
            .await
            .map_err(UpdateSiteSettingsError::from)
    }
}
