use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::profiles::application::ports::outgoing::ProfileData;
use crate::profiles::application::use_cases::update_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn default_color() -> String {
    "bg-foreground".to_string()
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
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

#[put("/api/profiles/{id}")]
pub async fn update_profile_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let app_id = path.into_inner();
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

    match data.profiles.update.execute(&app_id, profile).await {
        Ok(updated) => {
            info!(profile_id = %app_id, "Profile updated");
            ApiResponse::success(updated)
        }

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!("Failed to update profile {}: {}", app_id, msg);
            ApiResponse::internal_error()
        }
    }
}
