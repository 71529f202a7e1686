use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::skills::application::use_cases::delete_skill_category::DeleteSkillCategoryError;
use crate::AppState;

#[delete("/api/skills/{id}")]
pub async fn delete_skill_category_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();

    match data.skills.delete.execute(&app_id).await {
        Ok(()) => {
            info!(category_id = %app_id, "Skill category deleted");
            ApiResponse::success_message("Skill category deleted")
        }

        Err(DeleteSkillCategoryError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill category not found")
        }

        Err(DeleteSkillCategoryError::RepositoryError(msg)) => {
            error!("Failed to delete skill category {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}
