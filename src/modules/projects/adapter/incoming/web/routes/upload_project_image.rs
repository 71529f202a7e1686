use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::projects::application::use_cases::attach_project_image::AttachProjectImageError;
use crate::shared::api::ApiResponse;
use crate::uploads::adapter::incoming::multipart::read_required_upload;
use crate::uploads::application::domain::UploadKind;
use crate::AppState;

/// Multipart field `image`, image or PDF. The id resolves app-id first, then
/// the legacy internal id.
#[post("/api/projects/{id}/image")]
pub async fn upload_project_image_handler(
    _session: AdminSession,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let (file, _fields) = match read_required_upload(payload, UploadKind::ProjectImage).await {
        Ok(parsed) => parsed,
        Err(e) => return e.to_response(),
    };

    match data.projects.attach_image.execute(&id, file).await {
        Ok(project) => {
            info!(project_id = %id, image_url = ?project.image_url, "Project image uploaded");
            ApiResponse::success(project)
        }

        Err(AttachProjectImageError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(AttachProjectImageError::StorageError(msg)) => {
            error!("Failed to store project image: {}", msg);
            ApiResponse::internal_error()
        }

        Err(AttachProjectImageError::RepositoryError(msg)) => {
            error!("Failed to persist project image url: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
