use actix_multipart::Multipart;
use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::certificates::application::use_cases::update_certificate::UpdateCertificateError;
use crate::shared::api::ApiResponse;
use crate::uploads::adapter::incoming::multipart::read_upload_form;
use crate::uploads::application::domain::UploadKind;
use crate::AppState;

/// Multipart; everything optional. A new `file` part replaces the stored
/// file and its derived type.
#[put("/api/certificates/{id}")]
pub async fn update_certificate_handler(
    _session: AdminSession,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let form = match read_upload_form(payload, UploadKind::CertificateFile).await {
        Ok(form) => form,
        Err(e) => return e.to_response(),
    };

    let title = form.fields.get("title").cloned().filter(|v| !v.is_empty());
    let issuer = form.fields.get("issuer").cloned().filter(|v| !v.is_empty());

    match data
        .certificates
        .update
        .execute(&id, title, issuer, form.file)
        .await
    {
        Ok(certificate) => {
            info!(certificate_id = %id, "Certificate updated");
            ApiResponse::success(certificate)
        }

        Err(UpdateCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(UpdateCertificateError::StorageError(msg)) => {
            error!("Failed to store certificate file: {}", msg);
            ApiResponse::internal_error()
        }

        Err(UpdateCertificateError::RepositoryError(msg)) => {
            error!("Failed to update certificate {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificates::application::ports::outgoing::CertificateView;
    use crate::certificates::application::use_cases::update_certificate::IUpdateCertificateUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use crate::tests::support::multipart_helper::{multipart_put_request, FormBodyBuilder};
    use crate::uploads::adapter::incoming::multipart::ReceivedFile;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    #[derive(Clone)]
    struct MockUpdate {
        not_found: bool,
    }

    #[async_trait]
    impl IUpdateCertificateUseCase for MockUpdate {
        async fn execute(
            &self,
            id: &str,
            title: Option<String>,
            _issuer: Option<String>,
            file: Option<ReceivedFile>,
        ) -> Result<CertificateView, UpdateCertificateError> {
            if self.not_found {
                return Err(UpdateCertificateError::NotFound);
            }
            Ok(CertificateView {
                id: id.to_string(),
                title: title.unwrap_or_else(|| "AWS Certified".to_string()),
                issuer: "Amazon".to_string(),
                file_url: if file.is_some() {
                    "/uploads/file-2-2.png".to_string()
                } else {
                    "/uploads/file-1-1.pdf".to_string()
                },
                file_type: if file.is_some() { "image" } else { "pdf" }.to_string(),
                created_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn test_update_certificate_title_only() {
        let app_state = TestAppStateBuilder::default()
            .with_update_certificate(MockUpdate { not_found: false })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_certificate_handler),
        )
        .await;

        let body = FormBodyBuilder::new().text("title", "Renamed").finish();
        let req = multipart_put_request(
            "/api/certificates/2c9c7a6e-6c8a-4c9e-8f7c-0a1b2c3d4e5f",
            body,
        )
        .insert_header(("Authorization", format!("Bearer {}", admin_token())))
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["title"], "Renamed");
        assert_eq!(json["data"]["fileType"], "pdf");
    }

    #[actix_web::test]
    async fn test_update_certificate_with_replacement_file() {
        let app_state = TestAppStateBuilder::default()
            .with_update_certificate(MockUpdate { not_found: false })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_certificate_handler),
        )
        .await;

        let body = FormBodyBuilder::new()
            .file("file", "badge.png", "image/png", b"fakepng")
            .finish();
        let req = multipart_put_request(
            "/api/certificates/2c9c7a6e-6c8a-4c9e-8f7c-0a1b2c3d4e5f",
            body,
        )
        .insert_header(("Authorization", format!("Bearer {}", admin_token())))
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["fileType"], "image");
    }

    #[actix_web::test]
    async fn test_update_unknown_certificate_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_update_certificate(MockUpdate { not_found: true })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_certificate_handler),
        )
        .await;

        let body = FormBodyBuilder::new().text("title", "Renamed").finish();
        let req = multipart_put_request("/api/certificates/ghost", body)
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "CERTIFICATE_NOT_FOUND");
    }
}
