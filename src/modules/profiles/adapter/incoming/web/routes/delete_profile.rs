use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::profiles::application::use_cases::delete_profile::DeleteProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/profiles/{id}")]
pub async fn delete_profile_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();

    match data.profiles.delete.execute(&app_id).await {
        Ok(()) => {
            info!(profile_id = %app_id, "Profile deleted");
            ApiResponse::success_message("Profile deleted")
        }

        Err(DeleteProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(DeleteProfileError::RepositoryError(msg)) => {
            error!("Failed to delete profile {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}
