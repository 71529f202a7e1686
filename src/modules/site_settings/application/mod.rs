pub mod ports;
pub mod site_settings_use_cases;
pub mod use_cases;

pub use site_settings_use_cases::SiteSettingsUseCases;
