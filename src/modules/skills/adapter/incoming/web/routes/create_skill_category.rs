use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::skills::application::ports::outgoing::SkillCategoryData;
use crate::skills::application::use_cases::create_skill_category::CreateSkillCategoryError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillCategoryRequest {
    pub id: Option<String>,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[post("/api/skills")]
pub async fn create_skill_category_handler(
    _session: AdminSession,
    req: web::Json<CreateSkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let category = SkillCategoryData {
        title: req.title,
        icon: req.icon,
        skills: req.skills,
        order: req.order,
    };

    match data.skills.create.execute(req.id, category).await {
        Ok(created) => {
            info!(category_id = %created.id, "Skill category created");
            ApiResponse::created(created)
        }

        Err(CreateSkillCategoryError::IdAlreadyExists) => {
            ApiResponse::conflict("ID_ALREADY_EXISTS", "Skill category id already exists")
        }

        Err(CreateSkillCategoryError::RepositoryError(msg)) => {
            error!("Failed to create skill category: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
