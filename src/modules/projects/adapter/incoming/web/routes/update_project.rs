use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::projects::application::ports::outgoing::UpdateProjectData;
use crate::projects::application::use_cases::update_project::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateProjectData {
        title: req.title,
        description: req.description,
        technologies: req.technologies,
        live_url: req.live_url,
        github_url: req.github_url,
        featured: req.featured,
    };

    match data.projects.update.execute(&app_id, update).await {
        Ok(project) => {
            info!(project_id = %app_id, "Project updated");
            ApiResponse::success(project)
        }

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!("Failed to update project {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::application::ports::outgoing::ProjectView;
    use crate::projects::application::use_cases::update_project::IUpdateProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockUpdate {
        not_found: bool,
    }

    #[async_trait]
    impl IUpdateProjectUseCase for MockUpdate {
        async fn execute(
            &self,
            app_id: &str,
            data: UpdateProjectData,
        ) -> Result<ProjectView, UpdateProjectError> {
            if self.not_found {
                return Err(UpdateProjectError::NotFound);
            }
            Ok(ProjectView {
                id: app_id.to_string(),
                title: data.title,
                description: data.description,
                technologies: data.technologies,
                live_url: data.live_url,
                github_url: data.github_url,
                featured: data.featured,
                image_url: None,
            })
        }
    }

    #[actix_web::test]
    async fn test_update_project_success() {
        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdate { not_found: false })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/my-site")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(serde_json::json!({
                "title": "Renamed",
                "description": "desc",
                "featured": false
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["id"], "my-site");
        assert_eq!(json["data"]["title"], "Renamed");
    }

    #[actix_web::test]
    async fn test_update_unknown_project_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdate { not_found: true })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/ghost")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(serde_json::json!({"title": "x", "description": "y"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
