use std::sync::Arc;

use crate::auth::application::use_cases::admin_login::IAdminLoginUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn IAdminLoginUseCase + Send + Sync>,
}
