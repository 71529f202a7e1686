use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::site_settings::application::use_cases::get_site_settings::GetSiteSettingsError;
use crate::AppState;

#[get("/api/site-settings")]
pub async fn get_site_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site_settings.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),

        Err(GetSiteSettingsError::RepositoryError(msg)) => {
            error!("Failed to load site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_settings::application::ports::outgoing::{FooterLinks, SiteSettings};
    use crate::site_settings::application::use_cases::get_site_settings::IGetSiteSettingsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockGet;

    #[async_trait]
    impl IGetSiteSettingsUseCase for MockGet {
        async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError> {
            Ok(SiteSettings {
                footer_links: FooterLinks {
                    github: Some("https://github.com/owner".to_string()),
                    email: Some("mailto:owner@example.com".to_string()),
                    ..FooterLinks::default()
                },
            })
        }
    }

    #[actix_web::test]
    async fn test_get_site_settings_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_site_settings(MockGet)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_site_settings_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/site-settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["footerLinks"]["github"],
            "https://github.com/owner"
        );
        assert!(body["data"]["footerLinks"].get("twitter").is_none());
    }
}
