use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::site_settings::application::ports::outgoing::FooterLinks;
use crate::site_settings::application::use_cases::update_site_settings::UpdateSiteSettingsError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettingsRequest {
    #[serde(default)]
    pub footer_links: FooterLinks,
}

#[put("/api/site-settings")]
pub async fn update_site_settings_handler(
    _session: AdminSession,
    req: web::Json<UpdateSiteSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.site_settings.update.execute(req.footer_links).await {
        Ok(settings) => {
            info!("Site settings updated");
            ApiResponse::success(settings)
        }

        Err(e @ UpdateSiteSettingsError::InvalidUrl(_)) => {
            warn!("Site settings rejected: {}", e);
            ApiResponse::bad_request("INVALID_URL", &e.to_string())
        }

        Err(UpdateSiteSettingsError::RepositoryError(msg)) => {
            error!("Failed to update site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_settings::application::ports::outgoing::SiteSettings;
    use crate::site_settings::application::use_cases::update_site_settings::IUpdateSiteSettingsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockUpdate;

    #[async_trait]
    impl IUpdateSiteSettingsUseCase for MockUpdate {
        async fn execute(
            &self,
            footer_links: FooterLinks,
        ) -> Result<SiteSettings, UpdateSiteSettingsError> {
            if let Some(url) = &footer_links.github {
                if !url.starts_with("http") {
                    return Err(UpdateSiteSettingsError::InvalidUrl("GitHub"));
                }
            }
            Ok(SiteSettings { footer_links })
        }
    }

    #[actix_web::test]
    async fn test_update_site_settings_success() {
        let app_state = TestAppStateBuilder::default()
            .with_update_site_settings(MockUpdate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_site_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/site-settings")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(serde_json::json!({
                "footerLinks": {"github": "https://github.com/owner"}
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["footerLinks"]["github"],
            "https://github.com/owner"
        );
    }

    #[actix_web::test]
    async fn test_update_site_settings_rejects_bad_url() {
        let app_state = TestAppStateBuilder::default()
            .with_update_site_settings(MockUpdate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_site_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/site-settings")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(serde_json::json!({
                "footerLinks": {"github": "github.com/owner"}
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_URL");
    }

    #[actix_web::test]
    async fn test_update_site_settings_requires_token() {
        let app_state = TestAppStateBuilder::default()
            .with_update_site_settings(MockUpdate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_site_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/site-settings")
            .set_json(serde_json::json!({"footerLinks": {}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
