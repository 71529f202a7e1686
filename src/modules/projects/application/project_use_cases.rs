use std::sync::Arc;

use crate::projects::application::use_cases::{
    attach_project_image::IAttachProjectImageUseCase, create_project::ICreateProjectUseCase,
    delete_project::IDeleteProjectUseCase, get_projects::IGetProjectsUseCase,
    remove_project_image::IRemoveProjectImageUseCase, update_project::IUpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn IGetProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
    pub attach_image: Arc<dyn IAttachProjectImageUseCase + Send + Sync>,
    pub remove_image: Arc<dyn IRemoveProjectImageUseCase + Send + Sync>,
}
