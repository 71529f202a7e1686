use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::certificates::application::use_cases::delete_certificate::DeleteCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/certificates/{id}")]
pub async fn delete_certificate_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificates.delete.execute(&id).await {
        Ok(()) => {
            info!(certificate_id = %id, "Certificate deleted");
            ApiResponse::success_message("Certificate deleted")
        }

        Err(DeleteCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(DeleteCertificateError::RepositoryError(msg)) => {
            error!("Failed to delete certificate {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificates::application::use_cases::delete_certificate::IDeleteCertificateUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDelete {
        result: Result<(), DeleteCertificateError>,
    }

    #[async_trait]
    impl IDeleteCertificateUseCase for MockDelete {
        async fn execute(&self, _id: &str) -> Result<(), DeleteCertificateError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_delete_certificate_success() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_certificate(MockDelete { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_certificate_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/certificates/2c9c7a6e-6c8a-4c9e-8f7c-0a1b2c3d4e5f")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_delete_certificate_requires_token() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_certificate(MockDelete { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_certificate_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/certificates/2c9c7a6e-6c8a-4c9e-8f7c-0a1b2c3d4e5f")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_delete_unknown_certificate_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_certificate(MockDelete {
                result: Err(DeleteCertificateError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_certificate_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/certificates/ghost")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
