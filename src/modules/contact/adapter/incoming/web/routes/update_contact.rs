use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::contact::application::ports::outgoing::{ContactUpdate, SocialLinks};
use crate::contact::application::use_cases::update_contact::UpdateContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[put("/api/contact")]
pub async fn update_contact_handler(
    _session: AdminSession,
    req: web::Json<UpdateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = ContactUpdate {
        email: req.email,
        phone: req.phone,
        location: req.location,
        description: req.description,
        social_links: req.social_links,
    };

    match data.contact.update.execute(update).await {
        Ok(contact) => {
            info!("Contact details updated");
            ApiResponse::success(contact)
        }

        Err(UpdateContactError::RepositoryError(msg)) => {
            error!("Failed to update contact details: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
