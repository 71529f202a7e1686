pub mod skill_repository;

pub use skill_repository::{
    SkillCategoryData, SkillCategoryView, SkillRepository, SkillRepositoryError,
};
