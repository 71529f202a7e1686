mod get_site_settings;
mod update_site_settings;

pub use get_site_settings::*;
pub use update_site_settings::*;
