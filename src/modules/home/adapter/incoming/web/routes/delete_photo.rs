use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::home::application::use_cases::attach_home_file::HomeFileSlot;
use crate::home::application::use_cases::remove_home_file::RemoveHomeFileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/home/photo")]
pub async fn delete_photo_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.home.remove_file.execute(HomeFileSlot::Photo).await {
        Ok(home) => {
            info!("Photo removed");
            ApiResponse::success(home)
        }

        Err(RemoveHomeFileError::RepositoryError(msg)) => {
            error!("Failed to remove photo: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
