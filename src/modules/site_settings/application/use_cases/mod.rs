pub mod get_site_settings;
pub mod update_site_settings;
