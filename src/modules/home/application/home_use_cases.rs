use std::sync::Arc;

use crate::home::application::use_cases::{
    attach_home_file::IAttachHomeFileUseCase, get_home::IGetHomeUseCase,
    remove_home_file::IRemoveHomeFileUseCase, update_home::IUpdateHomeUseCase,
};

#[derive(Clone)]
pub struct HomeUseCases {
    pub get: Arc<dyn IGetHomeUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateHomeUseCase + Send + Sync>,
    pub attach_file: Arc<dyn IAttachHomeFileUseCase + Send + Sync>,
    pub remove_file: Arc<dyn IRemoveHomeFileUseCase + Send + Sync>,
}
