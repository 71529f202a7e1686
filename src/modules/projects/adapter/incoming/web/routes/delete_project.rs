use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::projects::application::use_cases::delete_project::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();

    match data.projects.delete.execute(&app_id).await {
        Ok(()) => {
            info!(project_id = %app_id, "Project deleted");
            ApiResponse::success_message("Project deleted")
        }

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Failed to delete project {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}
