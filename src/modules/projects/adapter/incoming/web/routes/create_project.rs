use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::projects::application::use_cases::create_project::{
    CreateProjectError, NewProject,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let project = NewProject {
        id: req.id,
        title: req.title,
        description: req.description,
        technologies: req.technologies,
        live_url: req.live_url,
        github_url: req.github_url,
        featured: req.featured,
    };

    match data.projects.create.execute(project).await {
        Ok(created) => {
            info!(project_id = %created.id, "Project created");
            ApiResponse::created(created)
        }

        Err(CreateProjectError::IdAlreadyExists) => {
            ApiResponse::conflict("ID_ALREADY_EXISTS", "Project id already exists")
        }

        Err(CreateProjectError::RepositoryError(msg)) => {
            error!("Failed to create project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
