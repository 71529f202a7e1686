use actix_web::{get, web, Responder};
use tracing::error;

use crate::contact::application::use_cases::get_contact::GetContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/contact")]
pub async fn get_contact_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get.execute().await {
        Ok(contact) => ApiResponse::success(contact),

        Err(GetContactError::RepositoryError(msg)) => {
            error!("Failed to load contact details: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
