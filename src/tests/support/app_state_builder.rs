use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

use crate::about::application::ports::outgoing::{AboutPage, AboutUpdate};
use crate::about::application::use_cases::get_about::{GetAboutError, IGetAboutUseCase};
use crate::about::application::use_cases::update_about::{IUpdateAboutUseCase, UpdateAboutError};
use crate::about::application::AboutUseCases;
use crate::auth::application::use_cases::admin_login::{
    AdminLoginResponse, IAdminLoginUseCase, LoginError, LoginRequest,
};
use crate::auth::application::AuthUseCases;
use crate::certificates::application::ports::outgoing::CertificateView;
use crate::certificates::application::use_cases::create_certificate::{
    CreateCertificateError, ICreateCertificateUseCase,
};
use crate::certificates::application::use_cases::delete_certificate::{
    DeleteCertificateError, IDeleteCertificateUseCase,
};
use crate::certificates::application::use_cases::get_certificates::{
    GetCertificatesError, IGetCertificatesUseCase,
};
use crate::certificates::application::use_cases::update_certificate::{
    IUpdateCertificateUseCase, UpdateCertificateError,
};
use crate::certificates::application::CertificateUseCases;
use crate::contact::application::ports::outgoing::{ContactDetails, ContactUpdate};
use crate::contact::application::use_cases::get_contact::{GetContactError, IGetContactUseCase};
use crate::contact::application::use_cases::send_message::{
    ContactSendRequest, ISendContactMessageUseCase, SendContactMessageError,
};
use crate::contact::application::use_cases::update_contact::{
    IUpdateContactUseCase, UpdateContactError,
};
use crate::contact::application::ContactUseCases;
use crate::home::application::ports::outgoing::{HomePage, HomeUpdate};
use crate::home::application::use_cases::attach_home_file::{
    AttachHomeFileError, HomeFileSlot, IAttachHomeFileUseCase,
};
use crate::home::application::use_cases::get_home::{GetHomeError, IGetHomeUseCase};
use crate::home::application::use_cases::remove_home_file::{
    IRemoveHomeFileUseCase, RemoveHomeFileError,
};
use crate::home::application::use_cases::update_home::{IUpdateHomeUseCase, UpdateHomeError};
use crate::home::application::HomeUseCases;
use crate::profiles::application::ports::outgoing::{ProfileData, ProfileView};
use crate::profiles::application::use_cases::create_profile::{
    CreateProfileError, ICreateProfileUseCase,
};
use crate::profiles::application::use_cases::delete_profile::{
    DeleteProfileError, IDeleteProfileUseCase,
};
use crate::profiles::application::use_cases::get_profiles::{
    GetProfilesError, IGetProfilesUseCase,
};
use crate::profiles::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};
use crate::profiles::application::ProfileUseCases;
use crate::projects::application::ports::outgoing::{ProjectView, UpdateProjectData};
use crate::projects::application::use_cases::attach_project_image::{
    AttachProjectImageError, IAttachProjectImageUseCase,
};
use crate::projects::application::use_cases::create_project::{
    CreateProjectError, ICreateProjectUseCase, NewProject,
};
use crate::projects::application::use_cases::delete_project::{
    DeleteProjectError, IDeleteProjectUseCase,
};
use crate::projects::application::use_cases::get_projects::{
    GetProjectsError, IGetProjectsUseCase,
};
use crate::projects::application::use_cases::remove_project_image::{
    IRemoveProjectImageUseCase, RemoveProjectImageError,
};
use crate::projects::application::use_cases::update_project::{
    IUpdateProjectUseCase, UpdateProjectError,
};
use crate::projects::application::ProjectUseCases;
use crate::site_settings::application::ports::outgoing::{FooterLinks, SiteSettings};
use crate::site_settings::application::use_cases::get_site_settings::{
    GetSiteSettingsError, IGetSiteSettingsUseCase,
};
use crate::site_settings::application::use_cases::update_site_settings::{
    IUpdateSiteSettingsUseCase, UpdateSiteSettingsError,
};
use crate::site_settings::application::SiteSettingsUseCases;
use crate::skills::application::ports::outgoing::{SkillCategoryData, SkillCategoryView};
use crate::skills::application::use_cases::create_skill_category::{
    CreateSkillCategoryError, ICreateSkillCategoryUseCase,
};
use crate::skills::application::use_cases::delete_skill_category::{
    DeleteSkillCategoryError, IDeleteSkillCategoryUseCase,
};
use crate::skills::application::use_cases::get_skills::{GetSkillsError, IGetSkillsUseCase};
use crate::skills::application::use_cases::update_skill_category::{
    IUpdateSkillCategoryUseCase, UpdateSkillCategoryError,
};
use crate::skills::application::SkillUseCases;
use crate::uploads::adapter::incoming::multipart::ReceivedFile;
use crate::AppState;

/// Placeholder for use cases a test did not wire. Reaching one is a test
/// bug, so it panics loudly.
struct Unwired;

#[async_trait]
impl IAdminLoginUseCase for Unwired {
    async fn execute(&self, _r: LoginRequest) -> Result<AdminLoginResponse, LoginError> {
        unimplemented!("admin login use case not wired in this test")
    }
}

#[async_trait]
impl IGetHomeUseCase for Unwired {
    async fn execute(&self) -> Result<HomePage, GetHomeError> {
        unimplemented!("get home use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateHomeUseCase for Unwired {
    async fn execute(&self, _u: HomeUpdate) -> Result<HomePage, UpdateHomeError> {
        unimplemented!("update home use case not wired in this test")
    }
}

#[async_trait]
impl IAttachHomeFileUseCase for Unwired {
    async fn execute(
        &self,
        _s: HomeFileSlot,
        _f: ReceivedFile,
    ) -> Result<HomePage, AttachHomeFileError> {
        unimplemented!("attach home file use case not wired in this test")
    }
}

#[async_trait]
impl IRemoveHomeFileUseCase for Unwired {
    async fn execute(&self, _s: HomeFileSlot) -> Result<HomePage, RemoveHomeFileError> {
        unimplemented!("remove home file use case not wired in this test")
    }
}

#[async_trait]
impl IGetAboutUseCase for Unwired {
    async fn execute(&self) -> Result<AboutPage, GetAboutError> {
        unimplemented!("get about use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateAboutUseCase for Unwired {
    async fn execute(&self, _u: AboutUpdate) -> Result<AboutPage, UpdateAboutError> {
        unimplemented!("update about use case not wired in this test")
    }
}

#[async_trait]
impl IGetContactUseCase for Unwired {
    async fn execute(&self) -> Result<ContactDetails, GetContactError> {
        unimplemented!("get contact use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateContactUseCase for Unwired {
    async fn execute(&self, _u: ContactUpdate) -> Result<ContactDetails, UpdateContactError> {
        unimplemented!("update contact use case not wired in this test")
    }
}

#[async_trait]
impl ISendContactMessageUseCase for Unwired {
    async fn execute(&self, _r: ContactSendRequest) -> Result<(), SendContactMessageError> {
        unimplemented!("send contact message use case not wired in this test")
    }
}

#[async_trait]
impl IGetSiteSettingsUseCase for Unwired {
    async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError> {
        unimplemented!("get site settings use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateSiteSettingsUseCase for Unwired {
    async fn execute(&self, _l: FooterLinks) -> Result<SiteSettings, UpdateSiteSettingsError> {
        unimplemented!("update site settings use case not wired in this test")
    }
}

#[async_trait]
impl IGetProjectsUseCase for Unwired {
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        unimplemented!("get projects use case not wired in this test")
    }
}

#[async_trait]
impl ICreateProjectUseCase for Unwired {
    async fn execute(&self, _p: NewProject) -> Result<ProjectView, CreateProjectError> {
        unimplemented!("create project use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateProjectUseCase for Unwired {
    async fn execute(
        &self,
        _id: &str,
        _d: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError> {
        unimplemented!("update project use case not wired in this test")
    }
}

#[async_trait]
impl IDeleteProjectUseCase for Unwired {
    async fn execute(&self, _id: &str) -> Result<(), DeleteProjectError> {
        unimplemented!("delete project use case not wired in this test")
    }
}

#[async_trait]
impl IAttachProjectImageUseCase for Unwired {
    async fn execute(
        &self,
        _id: &str,
        _f: ReceivedFile,
    ) -> Result<ProjectView, AttachProjectImageError> {
        unimplemented!("attach project image use case not wired in this test")
    }
}

#[async_trait]
impl IRemoveProjectImageUseCase for Unwired {
    async fn execute(&self, _id: &str) -> Result<ProjectView, RemoveProjectImageError> {
        unimplemented!("remove project image use case not wired in this test")
    }
}

#[async_trait]
impl IGetSkillsUseCase for Unwired {
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError> {
        unimplemented!("get skills use case not wired in this test")
    }
}

#[async_trait]
impl ICreateSkillCategoryUseCase for Unwired {
    async fn execute(
        &self,
        _id: Option<String>,
        _d: SkillCategoryData,
    ) -> Result<SkillCategoryView, CreateSkillCategoryError> {
        unimplemented!("create skill category use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateSkillCategoryUseCase for Unwired {
    async fn execute(
        &self,
        _id: &str,
        _d: SkillCategoryData,
    ) -> Result<SkillCategoryView, UpdateSkillCategoryError> {
        unimplemented!("update skill category use case not wired in this test")
    }
}

#[async_trait]
impl IDeleteSkillCategoryUseCase for Unwired {
    async fn execute(&self, _id: &str) -> Result<(), DeleteSkillCategoryError> {
        unimplemented!("delete skill category use case not wired in this test")
    }
}

#[async_trait]
impl IGetProfilesUseCase for Unwired {
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError> {
        unimplemented!("get profiles use case not wired in this test")
    }
}

#[async_trait]
impl ICreateProfileUseCase for Unwired {
    async fn execute(
        &self,
        _id: Option<String>,
        _d: ProfileData,
    ) -> Result<ProfileView, CreateProfileError> {
        unimplemented!("create profile use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateProfileUseCase for Unwired {
    async fn execute(
        &self,
        _id: &str,
        _d: ProfileData,
    ) -> Result<ProfileView, UpdateProfileError> {
        unimplemented!("update profile use case not wired in this test")
    }
}

#[async_trait]
impl IDeleteProfileUseCase for Unwired {
    async fn execute(&self, _id: &str) -> Result<(), DeleteProfileError> {
        unimplemented!("delete profile use case not wired in this test")
    }
}

#[async_trait]
impl IGetCertificatesUseCase for Unwired {
    async fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError> {
        unimplemented!("get certificates use case not wired in this test")
    }
}

#[async_trait]
impl ICreateCertificateUseCase for Unwired {
    async fn execute(
        &self,
        _title: String,
        _issuer: String,
        _file: ReceivedFile,
    ) -> Result<CertificateView, CreateCertificateError> {
        unimplemented!("create certificate use case not wired in this test")
    }
}

#[async_trait]
impl IUpdateCertificateUseCase for Unwired {
    async fn execute(
        &self,
        _id: &str,
        _title: Option<String>,
        _issuer: Option<String>,
        _file: Option<ReceivedFile>,
    ) -> Result<CertificateView, UpdateCertificateError> {
        unimplemented!("update certificate use case not wired in this test")
    }
}

#[async_trait]
impl IDeleteCertificateUseCase for Unwired {
    async fn execute(&self, _id: &str) -> Result<(), DeleteCertificateError> {
        unimplemented!("delete certificate use case not wired in this test")
    }
}

/// Builds an `AppState` for route tests: every slot defaults to [`Unwired`],
/// tests swap in mocks for exactly the use cases they exercise.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unwired = Arc::new(Unwired);

        Self {
            state: AppState {
                auth: AuthUseCases {
                    login: unwired.clone(),
                },
                home: HomeUseCases {
                    get: unwired.clone(),
                    update: unwired.clone(),
                    attach_file: unwired.clone(),
                    remove_file: unwired.clone(),
                },
                about: AboutUseCases {
                    get: unwired.clone(),
                    update: unwired.clone(),
                },
                contact: ContactUseCases {
                    get: unwired.clone(),
                    update: unwired.clone(),
                    send_message: unwired.clone(),
                },
                site_settings: SiteSettingsUseCases {
                    get: unwired.clone(),
                    update: unwired.clone(),
                },
                projects: ProjectUseCases {
                    list: unwired.clone(),
                    create: unwired.clone(),
                    update: unwired.clone(),
                    delete: unwired.clone(),
                    attach_image: unwired.clone(),
                    remove_image: unwired.clone(),
                },
                skills: SkillUseCases {
                    list: unwired.clone(),
                    create: unwired.clone(),
                    update: unwired.clone(),
                    delete: unwired.clone(),
                },
                profiles: ProfileUseCases {
                    list: unwired.clone(),
                    create: unwired.clone(),
                    update: unwired.clone(),
                    delete: unwired.clone(),
                },
                certificates: CertificateUseCases {
                    list: unwired.clone(),
                    create: unwired.clone(),
                    update: unwired.clone(),
                    delete: unwired,
                },
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_admin_login(mut self, uc: impl IAdminLoginUseCase + 'static) -> Self {
        self.state.auth.login = Arc::new(uc);
        self
    }

    pub fn with_get_home(mut self, uc: impl IGetHomeUseCase + 'static) -> Self {
        self.state.home.get = Arc::new(uc);
        self
    }

    pub fn with_update_home(mut self, uc: impl IUpdateHomeUseCase + 'static) -> Self {
        self.state.home.update = Arc::new(uc);
        self
    }

    pub fn with_attach_home_file(mut self, uc: impl IAttachHomeFileUseCase + 'static) -> Self {
        self.state.home.attach_file = Arc::new(uc);
        self
    }

    pub fn with_remove_home_file(mut self, uc: impl IRemoveHomeFileUseCase + 'static) -> Self {
        self.state.home.remove_file = Arc::new(uc);
        self
    }

    pub fn with_get_about(mut self, uc: impl IGetAboutUseCase + 'static) -> Self {
        self.state.about.get = Arc::new(uc);
        self
    }

    pub fn with_update_about(mut self, uc: impl IUpdateAboutUseCase + 'static) -> Self {
        self.state.about.update = Arc::new(uc);
        self
    }

    pub fn with_get_contact(mut self, uc: impl IGetContactUseCase + 'static) -> Self {
        self.state.contact.get = Arc::new(uc);
        self
    }

    pub fn with_update_contact(mut self, uc: impl IUpdateContactUseCase + 'static) -> Self {
        self.state.contact.update = Arc::new(uc);
        self
    }

    pub fn with_send_contact_message(
        mut self,
        uc: impl ISendContactMessageUseCase + 'static,
    ) -> Self {
        self.state.contact.send_message = Arc::new(uc);
        self
    }

    pub fn with_get_site_settings(mut self, uc: impl IGetSiteSettingsUseCase + 'static) -> Self {
        self.state.site_settings.get = Arc::new(uc);
        self
    }

    pub fn with_update_site_settings(
        mut self,
        uc: impl IUpdateSiteSettingsUseCase + 'static,
    ) -> Self {
        self.state.site_settings.update = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl IGetProjectsUseCase + 'static) -> Self {
        self.state.projects.list = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl ICreateProjectUseCase + 'static) -> Self {
        self.state.projects.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl IUpdateProjectUseCase + 'static) -> Self {
        self.state.projects.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl IDeleteProjectUseCase + 'static) -> Self {
        self.state.projects.delete = Arc::new(uc);
        self
    }

    pub fn with_attach_project_image(
        mut self,
        uc: impl IAttachProjectImageUseCase + 'static,
    ) -> Self {
        self.state.projects.attach_image = Arc::new(uc);
        self
    }

    pub fn with_remove_project_image(
        mut self,
        uc: impl IRemoveProjectImageUseCase + 'static,
    ) -> Self {
        self.state.projects.remove_image = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl IGetSkillsUseCase + 'static) -> Self {
        self.state.skills.list = Arc::new(uc);
        self
    }

    pub fn with_create_skill_category(
        mut self,
        uc: impl ICreateSkillCategoryUseCase + 'static,
    ) -> Self {
        self.state.skills.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill_category(
        mut self,
        uc: impl IUpdateSkillCategoryUseCase + 'static,
    ) -> Self {
        self.state.skills.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill_category(
        mut self,
        uc: impl IDeleteSkillCategoryUseCase + 'static,
    ) -> Self {
        self.state.skills.delete = Arc::new(uc);
        self
    }

    pub fn with_get_profiles(mut self, uc: impl IGetProfilesUseCase + 'static) -> Self {
        self.state.profiles.list = Arc::new(uc);
        self
    }

    pub fn with_create_profile(mut self, uc: impl ICreateProfileUseCase + 'static) -> Self {
        self.state.profiles.create = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.state.profiles.update = Arc::new(uc);
        self
    }

    pub fn with_delete_profile(mut self, uc: impl IDeleteProfileUseCase + 'static) -> Self {
        self.state.profiles.delete = Arc::new(uc);
        self
    }

    pub fn with_get_certificates(mut self, uc: impl IGetCertificatesUseCase + 'static) -> Self {
        self.state.certificates.list = Arc::new(uc);
        self
    }

    pub fn with_create_certificate(
        mut self,
        uc: impl ICreateCertificateUseCase + 'static,
    ) -> Self {
        self.state.certificates.create = Arc::new(uc);
        self
    }

    pub fn with_update_certificate(
        mut self,
        uc: impl IUpdateCertificateUseCase + 'static,
    ) -> Self {
        self.state.certificates.update = Arc::new(uc);
        self
    }

    pub fn with_delete_certificate(
        mut self,
        uc: impl IDeleteCertificateUseCase + 'static,
    ) -> Self {
        self.state.certificates.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
