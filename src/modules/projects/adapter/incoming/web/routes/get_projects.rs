use actix_web::{get, web, Responder};
use tracing::error;

use crate::projects::application::use_cases::get_projects::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.projects.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::application::ports::outgoing::ProjectView;
    use crate::projects::application::use_cases::get_projects::IGetProjectsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockList;

    #[async_trait]
    impl IGetProjectsUseCase for MockList {
        async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
            Ok(vec![
                ProjectView {
                    id: "featured-app".to_string(),
                    title: "Featured".to_string(),
                    description: "desc".to_string(),
                    technologies: vec!["Rust".to_string()],
                    live_url: None,
                    github_url: None,
                    featured: true,
                    image_url: Some("/uploads/image-1-1.png".to_string()),
                },
                ProjectView {
                    id: "older-app".to_string(),
                    title: "Older".to_string(),
                    description: "desc".to_string(),
                    technologies: vec![],
                    live_url: None,
                    github_url: None,
                    featured: false,
                    image_url: None,
                },
            ])
        }
    }

    #[actix_web::test]
    async fn test_get_projects_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(MockList)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["id"], "featured-app");
        assert_eq!(body["data"][0]["featured"], true);
        assert_eq!(body["data"][0]["imageUrl"], "/uploads/image-1-1.png");
    }
}
