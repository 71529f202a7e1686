use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::home::application::ports::outgoing::HomeUpdate;
use crate::home::application::use_cases::update_home::UpdateHomeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomeRequest {
    pub name: String,
    pub tagline: String,
    #[serde(default = "default_available")]
    pub available_for_opportunities: bool,
}

fn default_available() -> bool {
    true
}

#[put("/api/home")]
pub async fn update_home_handler(
    _session: AdminSession,
    req: web::Json<UpdateHomeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = HomeUpdate {
        name: req.name,
        tagline: req.tagline,
        available_for_opportunities: req.available_for_opportunities,
    };

    match data.home.update.execute(update).await {
        Ok(home) => {
            info!("Home page updated");
            ApiResponse::success(home)
        }

        Err(UpdateHomeError::RepositoryError(msg)) => {
            error!("Failed to update home page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
