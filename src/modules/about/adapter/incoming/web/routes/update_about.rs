use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::about::application::ports::outgoing::{AboutUpdate, EducationEntry};
use crate::about::application::use_cases::update_about::UpdateAboutError;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateAboutRequest {
    pub bio: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

#[put("/api/about")]
pub async fn update_about_handler(
    _session: AdminSession,
    req: web::Json<UpdateAboutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = AboutUpdate {
        bio: req.bio,
        education: req.education,
    };

    match data.about.update.execute(update).await {
        Ok(about) => {
            info!("About page updated");
            ApiResponse::success(about)
        }

        Err(UpdateAboutError::RepositoryError(msg)) => {
            error!("Failed to update about page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
