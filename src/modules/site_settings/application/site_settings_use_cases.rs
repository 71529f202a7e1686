use std::sync::Arc;

use crate::site_settings::application::use_cases::{
    get_site_settings::IGetSiteSettingsUseCase,
    update_site_settings::IUpdateSiteSettingsUseCase,
};

#[derive(Clone)]
pub struct SiteSettingsUseCases {
    pub get: Arc<dyn IGetSiteSettingsUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateSiteSettingsUseCase + Send + Sync>,
}
