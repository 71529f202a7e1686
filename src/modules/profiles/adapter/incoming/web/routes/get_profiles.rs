use actix_web::{get, web, Responder};
use tracing::error;

use crate::profiles::application::use_cases::get_profiles::GetProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profiles")]
pub async fn get_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profiles.list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles),

        Err(GetProfilesError::QueryFailed(msg)) => {
            error!("Failed to list profiles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
