use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{AdminLoginRequestDto, AdminLoginResponseDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "API documentation for the personal-portfolio backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::admin_login_handler,

        // Home endpoints
        // get_home_handler,
        // update_home_handler,
        // upload_resume_handler,
        // delete_resume_handler,
        // upload_photo_handler,
        // delete_photo_handler,

        // Project endpoints
        // get_projects_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,
        // upload_project_image_handler,
        // delete_project_image_handler,

        // Skill endpoints
        // get_skills_handler,
        // create_skill_category_handler,
        // update_skill_category_handler,
        // delete_skill_category_handler,

        // Profile endpoints
        // get_profiles_handler,
        // create_profile_handler,
        // update_profile_handler,
        // delete_profile_handler,

        // About / contact / site-settings endpoints
        // get_about_handler,
        // update_about_handler,
        // get_contact_handler,
        // update_contact_handler,
        // send_message_handler,
        // get_site_settings_handler,
        // update_site_settings_handler,

        // Certificate endpoints
        // get_certificates_handler,
        // create_certificate_handler,
        // update_certificate_handler,
        // delete_certificate_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminLoginResponseDto>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            AdminLoginRequestDto,
            AdminLoginResponseDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
