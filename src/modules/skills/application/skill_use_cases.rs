use std::sync::Arc;

use crate::skills::application::use_cases::{
    create_skill_category::ICreateSkillCategoryUseCase,
    delete_skill_category::IDeleteSkillCategoryUseCase, get_skills::IGetSkillsUseCase,
    update_skill_category::IUpdateSkillCategoryUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn IGetSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateSkillCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateSkillCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteSkillCategoryUseCase + Send + Sync>,
}
