use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::certificates::application::use_cases::create_certificate::CreateCertificateError;
use crate::shared::api::ApiResponse;
use crate::uploads::adapter::incoming::multipart::read_required_upload;
use crate::uploads::application::domain::UploadKind;
use crate::AppState;

/// Multipart: text fields `title` and `issuer` alongside the `file` part
/// (image or PDF).
#[post("/api/certificates")]
pub async fn create_certificate_handler(
    _session: AdminSession,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let (file, fields) = match read_required_upload(payload, UploadKind::CertificateFile).await {
        Ok(parsed) => parsed,
        Err(e) => return e.to_response(),
    };

    let title = fields.get("title").cloned().unwrap_or_default();
    let issuer = fields.get("issuer").cloned().unwrap_or_default();

    match data.certificates.create.execute(title, issuer, file).await {
        Ok(certificate) => {
            info!(certificate_id = %certificate.id, "Certificate created");
            ApiResponse::success(certificate)
        }

        Err(CreateCertificateError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Title and issuer are required")
        }

        Err(CreateCertificateError::StorageError(msg)) => {
            error!("Failed to store certificate file: {}", msg);
            ApiResponse::internal_error()
        }

        Err(CreateCertificateError::RepositoryError(msg)) => {
            error!("Failed to create certificate: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
