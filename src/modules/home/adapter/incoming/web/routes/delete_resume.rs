use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::home::application::use_cases::attach_home_file::HomeFileSlot;
use crate::home::application::use_cases::remove_home_file::RemoveHomeFileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/home/resume")]
pub async fn delete_resume_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.home.remove_file.execute(HomeFileSlot::Resume).await {
        Ok(home) => {
            info!("Resume removed");
            ApiResponse::success(home)
        }

        Err(RemoveHomeFileError::RepositoryError(msg)) => {
            error!("Failed to remove resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
