use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skills::application::use_cases::get_skills::GetSkillsError;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skill categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
