use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::profiles::application::ports::outgoing::ProfileData;
use crate::profiles::application::use_cases::create_profile::CreateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn default_color() -> String {
    "bg-foreground".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub id: Option<String>,
    pub name: String,
    pub username: String,
    pub url: String,
    pub stats: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub order: i32,
}

#[post("/api/profiles")]
pub async fn create_profile_handler(
    _session: AdminSession,
    req: web::Json<CreateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let profile = ProfileData {
        name: req.name,
        username: req.username,
        url: req.url,
        stats: req.stats,
        description: req.description,
        color: req.color,
        order: req.order,
    };

    match data.profiles.create.execute(req.id, profile).await {
        Ok(created) => {
            info!(profile_id = %created.id, "Profile created");
            ApiResponse::created(created)
        }

        Err(CreateProfileError::IdAlreadyExists) => {
            ApiResponse::conflict("ID_ALREADY_EXISTS", "Profile id already exists")
        }

        Err(CreateProfileError::RepositoryError(msg)) => {
            error!("Failed to create profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
