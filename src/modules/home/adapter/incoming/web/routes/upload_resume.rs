use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::home::application::use_cases::attach_home_file::{
    AttachHomeFileError, HomeFileSlot,
};
use crate::shared::api::ApiResponse;
use crate::uploads::adapter::incoming::multipart::read_required_upload;
use crate::uploads::application::domain::UploadKind;
use crate::AppState;

/// Multipart field `resume`, PDF only. The previous resume file is removed
/// from disk once the new path is persisted.
#[post("/api/home/resume")]
pub async fn upload_resume_handler(
    _session: AdminSession,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let (file, _fields) = match read_required_upload(payload, UploadKind::Resume).await {
        Ok(parsed) => parsed,
        Err(e) => return e.to_response(),
    };

    match data.home.attach_file.execute(HomeFileSlot::Resume, file).await {
        Ok(home) => {
            info!(resume_url = ?home.resume_url, "Resume uploaded");
            ApiResponse::success(home)
        }

        Err(AttachHomeFileError::StorageError(msg)) => {
            error!("Failed to store resume: {}", msg);
            ApiResponse::internal_error()
        }

        Err(AttachHomeFileError::RepositoryError(msg)) => {
            error!("Failed to persist resume url: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
