use std::sync::Arc;

use crate::profiles::application::use_cases::{
    create_profile::ICreateProfileUseCase, delete_profile::IDeleteProfileUseCase,
    get_profiles::IGetProfilesUseCase, update_profile::IUpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub list: Arc<dyn IGetProfilesUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProfileUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteProfileUseCase + Send + Sync>,
}
