use std::sync::Arc;

use crate::contact::application::use_cases::{
    get_contact::IGetContactUseCase, send_message::ISendContactMessageUseCase,
    update_contact::IUpdateContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get: Arc<dyn IGetContactUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateContactUseCase + Send + Sync>,
    pub send_message: Arc<dyn ISendContactMessageUseCase + Send + Sync>,
}
