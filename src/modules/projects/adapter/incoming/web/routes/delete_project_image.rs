use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::projects::application::use_cases::remove_project_image::RemoveProjectImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{id}/image")]
pub async fn delete_project_image_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.remove_image.execute(&id).await {
        Ok(project) => {
            info!(project_id = %id, "Project image removed");
            ApiResponse::success(project)
        }

        Err(RemoveProjectImageError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(RemoveProjectImageError::RepositoryError(msg)) => {
            error!("Failed to remove project image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
