use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::contact::application::use_cases::send_message::{
    ContactSendRequest, SendContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Public endpoint: relays a contact-form submission to the site owner.
#[post("/api/contact/send")]
pub async fn send_message_handler(
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = ContactSendRequest {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    };

    match data.contact.send_message.execute(request).await {
        Ok(()) => {
            info!("Contact message relayed");
            ApiResponse::success_message("Message sent successfully")
        }

        Err(SendContactMessageError::Validation(msg)) => {
            warn!("Contact send rejected: {}", msg);
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SendContactMessageError::RecipientNotConfigured) => {
            error!("Contact send failed: no recipient configured");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_NOT_CONFIGURED",
                "Contact email not configured",
            )
        }

        Err(SendContactMessageError::RepositoryError(msg)) => {
            error!("Contact send failed loading recipient: {}", msg);
            ApiResponse::internal_error()
        }

        Err(SendContactMessageError::NotifyFailed(msg)) => {
            error!("Contact send failed at provider: {}", msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SEND_FAILED",
                "Failed to send message. Please try again later.",
            )
        }
    }
}
