pub mod site_settings_repository;

pub use site_settings_repository::{
    FooterLinks, SiteSettings, SiteSettingsRepository, SiteSettingsRepositoryError,
};
