use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::skills::application::ports::outgoing::SkillCategoryData;
use crate::skills::application::use_cases::update_skill_category::UpdateSkillCategoryError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSkillCategoryRequest {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[put("/api/skills/{id}")]
pub async fn update_skill_category_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<UpdateSkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();
    let req = req.into_inner();

    let category = SkillCategoryData {
        title: req.title,
        icon: req.icon,
        skills: req.skills,
        order: req.order,
    };

    match data.skills.update.execute(&app_id, category).await {
        Ok(updated) => {
            info!(category_id = %app_id, "Skill category updated");
            ApiResponse::success(updated)
        }

        Err(UpdateSkillCategoryError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill category not found")
        }

        Err(UpdateSkillCategoryError::RepositoryError(msg)) => {
            error!("Failed to update skill category {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}
