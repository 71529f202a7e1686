use actix_web::{get, web, Responder};
use tracing::error;

use crate::about::application::use_cases::get_about::GetAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get.execute().await {
        Ok(about) => ApiResponse::success(about),

        Err(GetAboutError::RepositoryError(msg)) => {
            error!("Failed to load about page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::application::ports::outgoing::{AboutPage, EducationEntry};
    use crate::about::application::use_cases::get_about::IGetAboutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockGetAbout;

    #[async_trait]
    impl IGetAboutUseCase for MockGetAbout {
        async fn execute(&self) -> Result<AboutPage, GetAboutError> {
            Ok(AboutPage {
                bio: "Bio text".to_string(),
                education: vec![EducationEntry {
                    degree: "B.Sc.".to_string(),
                    school: "State University".to_string(),
                    period: "2015 - 2019".to_string(),
                }],
            })
        }
    }

    #[actix_web::test]
    async fn test_get_about_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_about(MockGetAbout)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_about_handler)).await;

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["bio"], "Bio text");
        assert_eq!(body["data"]["education"][0]["school"], "State University");
    }
}
