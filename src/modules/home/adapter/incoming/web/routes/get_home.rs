use actix_web::{get, web, Responder};
use tracing::error;

use crate::home::application::use_cases::get_home::GetHomeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    match data.home.get.execute().await {
        Ok(home) => ApiResponse::success(home),

        Err(GetHomeError::RepositoryError(msg)) => {
            error!("Failed to load home page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
