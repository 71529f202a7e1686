use actix_web::{get, web, Responder};
use tracing::error;

use crate::certificates::application::use_cases::get_certificates::GetCertificatesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certificates.list.execute().await {
        Ok(certificates) => ApiResponse::success(certificates),

        Err(GetCertificatesError::QueryFailed(msg)) => {
            error!("Failed to list certificates: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
