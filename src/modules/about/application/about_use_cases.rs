use std::sync::Arc;

use crate::about::application::use_cases::{
    get_about::IGetAboutUseCase, update_about::IUpdateAboutUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn IGetAboutUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateAboutUseCase + Send + Sync>,
}
