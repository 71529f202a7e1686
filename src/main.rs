pub mod modules;
pub use modules::about;
pub use modules::auth;
pub use modules::certificates;
pub use modules::contact;
pub use modules::email;
pub use modules::home;
pub use modules::profiles;
pub use modules::projects;
pub use modules::site_settings;
pub use modules::skills;
pub use modules::uploads;

pub mod api;
pub mod health;
pub mod shared;

use crate::about::adapter::outgoing::AboutRepositoryPostgres;
use crate::about::application::use_cases::{
    get_about::GetAboutUseCase, update_about::UpdateAboutUseCase,
};
use crate::about::application::AboutUseCases;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptVerifier;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::admin_login::AdminLoginUseCase;
use crate::auth::application::AuthUseCases;
use crate::certificates::adapter::outgoing::CertificateRepositoryPostgres;
use crate::certificates::application::use_cases::{
    create_certificate::CreateCertificateUseCase, delete_certificate::DeleteCertificateUseCase,
    get_certificates::GetCertificatesUseCase, update_certificate::UpdateCertificateUseCase,
};
use crate::certificates::application::CertificateUseCases;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::use_cases::{
    get_contact::GetContactUseCase, send_message::SendContactMessageUseCase,
    update_contact::UpdateContactUseCase,
};
use crate::contact::application::ContactUseCases;
use crate::email::adapter::outgoing::SmtpContactNotifier;
use crate::email::application::ports::outgoing::ContactFormNotifier;
use crate::home::adapter::outgoing::HomeRepositoryPostgres;
use crate::home::application::use_cases::{
    attach_home_file::AttachHomeFileUseCase, get_home::GetHomeUseCase,
    remove_home_file::RemoveHomeFileUseCase, update_home::UpdateHomeUseCase,
};
use crate::home::application::HomeUseCases;
use crate::profiles::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profiles::application::use_cases::{
    create_profile::CreateProfileUseCase, delete_profile::DeleteProfileUseCase,
    get_profiles::GetProfilesUseCase, update_profile::UpdateProfileUseCase,
};
use crate::profiles::application::ProfileUseCases;
use crate::projects::adapter::outgoing::ProjectRepositoryPostgres;
use crate::projects::application::use_cases::{
    attach_project_image::AttachProjectImageUseCase, create_project::CreateProjectUseCase,
    delete_project::DeleteProjectUseCase, get_projects::GetProjectsUseCase,
    remove_project_image::RemoveProjectImageUseCase, update_project::UpdateProjectUseCase,
};
use crate::projects::application::ProjectUseCases;
use crate::site_settings::adapter::outgoing::SiteSettingsRepositoryPostgres;
use crate::site_settings::application::use_cases::{
    get_site_settings::GetSiteSettingsUseCase, update_site_settings::UpdateSiteSettingsUseCase,
};
use crate::site_settings::application::SiteSettingsUseCases;
use crate::skills::adapter::outgoing::SkillRepositoryPostgres;
use crate::skills::application::use_cases::{
    create_skill_category::CreateSkillCategoryUseCase,
    delete_skill_category::DeleteSkillCategoryUseCase, get_skills::GetSkillsUseCase,
    update_skill_category::UpdateSkillCategoryUseCase,
};
use crate::skills::application::SkillUseCases;
use crate::uploads::adapter::outgoing::LocalFileStore;
use crate::uploads::application::ports::outgoing::FileStore;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub home: HomeUseCases,
    pub about: AboutUseCases,
    pub contact: ContactUseCases,
    pub site_settings: SiteSettingsUseCases,
    pub projects: ProjectUseCases,
    pub skills: SkillUseCases,
    pub profiles: ProfileUseCases,
    pub certificates: CertificateUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let admin_password_hash =
        env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH is not set in .env file");
    let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| "public/uploads".to_string());

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let contact_recipient = std::env::var("CONTACT_RECIPIENT_EMAIL").ok();
    let smtp_notifier = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpContactNotifier::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpContactNotifier::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Upload directory, served statically below
    let file_store = LocalFileStore::new(uploads_dir.clone());
    file_store
        .ensure_root()
        .await
        .expect("Failed to create uploads directory");
    let file_store_arc: Arc<dyn FileStore + Send + Sync> = Arc::new(file_store);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let login_use_case = AdminLoginUseCase::new(
        admin_password_hash,
        BcryptVerifier,
        Arc::clone(&token_provider_arc),
    );

    // Home
    let home_repo = HomeRepositoryPostgres::new(Arc::clone(&db_arc));
    let home = HomeUseCases {
        get: Arc::new(GetHomeUseCase::new(home_repo.clone())),
        update: Arc::new(UpdateHomeUseCase::new(home_repo.clone())),
        attach_file: Arc::new(AttachHomeFileUseCase::new(
            home_repo.clone(),
            Arc::clone(&file_store_arc),
        )),
        remove_file: Arc::new(RemoveHomeFileUseCase::new(
            home_repo,
            Arc::clone(&file_store_arc),
        )),
    };

    // About
    let about_repo = AboutRepositoryPostgres::new(Arc::clone(&db_arc));
    let about = AboutUseCases {
        get: Arc::new(GetAboutUseCase::new(about_repo.clone())),
        update: Arc::new(UpdateAboutUseCase::new(about_repo)),
    };

    // Contact (+ mail relay)
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let notifier_arc: Arc<dyn ContactFormNotifier + Send + Sync> = Arc::new(smtp_notifier);
    let contact = ContactUseCases {
        get: Arc::new(GetContactUseCase::new(contact_repo.clone())),
        update: Arc::new(UpdateContactUseCase::new(contact_repo.clone())),
        send_message: Arc::new(SendContactMessageUseCase::new(
            contact_repo,
            notifier_arc,
            contact_recipient,
        )),
    };

    // Site settings
    let settings_repo = SiteSettingsRepositoryPostgres::new(Arc::clone(&db_arc));
    let site_settings = SiteSettingsUseCases {
        get: Arc::new(GetSiteSettingsUseCase::new(settings_repo.clone())),
        update: Arc::new(UpdateSiteSettingsUseCase::new(settings_repo)),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let projects = ProjectUseCases {
        list: Arc::new(GetProjectsUseCase::new(project_repo.clone())),
        create: Arc::new(CreateProjectUseCase::new(project_repo.clone())),
        update: Arc::new(UpdateProjectUseCase::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectUseCase::new(project_repo.clone())),
        attach_image: Arc::new(AttachProjectImageUseCase::new(
            project_repo.clone(),
            Arc::clone(&file_store_arc),
        )),
        remove_image: Arc::new(RemoveProjectImageUseCase::new(
            project_repo,
            Arc::clone(&file_store_arc),
        )),
    };

    // Skills
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skills = SkillUseCases {
        list: Arc::new(GetSkillsUseCase::new(skill_repo.clone())),
        create: Arc::new(CreateSkillCategoryUseCase::new(skill_repo.clone())),
        update: Arc::new(UpdateSkillCategoryUseCase::new(skill_repo.clone())),
        delete: Arc::new(DeleteSkillCategoryUseCase::new(skill_repo)),
    };

    // Profiles
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profiles = ProfileUseCases {
        list: Arc::new(GetProfilesUseCase::new(profile_repo.clone())),
        create: Arc::new(CreateProfileUseCase::new(profile_repo.clone())),
        update: Arc::new(UpdateProfileUseCase::new(profile_repo.clone())),
        delete: Arc::new(DeleteProfileUseCase::new(profile_repo)),
    };

    // Certificates
    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db_arc));
    let certificates = CertificateUseCases {
        list: Arc::new(GetCertificatesUseCase::new(certificate_repo.clone())),
        create: Arc::new(CreateCertificateUseCase::new(
            certificate_repo.clone(),
            Arc::clone(&file_store_arc),
        )),
        update: Arc::new(UpdateCertificateUseCase::new(
            certificate_repo.clone(),
            Arc::clone(&file_store_arc),
        )),
        delete: Arc::new(DeleteCertificateUseCase::new(
            certificate_repo,
            Arc::clone(&file_store_arc),
        )),
    };

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(login_use_case),
        },
        home,
        about,
        contact,
        site_settings,
        projects,
        skills,
        profiles,
        certificates,
    };

    // Clone for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .service(Files::new("/uploads", uploads_dir.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    // Home
    cfg.service(crate::home::adapter::incoming::web::routes::get_home_handler);
    cfg.service(crate::home::adapter::incoming::web::routes::update_home_handler);
    cfg.service(crate::home::adapter::incoming::web::routes::upload_resume_handler);
    cfg.service(crate::home::adapter::incoming::web::routes::delete_resume_handler);
    cfg.service(crate::home::adapter::incoming::web::routes::upload_photo_handler);
    cfg.service(crate::home::adapter::incoming::web::routes::delete_photo_handler);
    // Projects
    cfg.service(crate::projects::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::projects::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::projects::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::projects::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::projects::adapter::incoming::web::routes::upload_project_image_handler);
    cfg.service(crate::projects::adapter::incoming::web::routes::delete_project_image_handler);
    // Skills
    cfg.service(crate::skills::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::create_skill_category_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::update_skill_category_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::delete_skill_category_handler);
    // Profiles
    cfg.service(crate::profiles::adapter::incoming::web::routes::get_profiles_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::delete_profile_handler);
    // About
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::update_about_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::send_message_handler);
    // Certificates
    cfg.service(crate::certificates::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(crate::certificates::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(crate::certificates::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::certificates::adapter::incoming::web::routes::delete_certificate_handler);
    // Site settings
    cfg.service(crate::site_settings::adapter::incoming::web::routes::get_site_settings_handler);
    cfg.service(
        crate::site_settings::adapter::incoming::web::routes::update_site_settings_handler,
    );
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
