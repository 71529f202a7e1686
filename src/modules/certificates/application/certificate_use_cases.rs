use std::sync::Arc;

use crate::certificates::application::use_cases::{
    create_certificate::ICreateCertificateUseCase, delete_certificate::IDeleteCertificateUseCase,
    get_certificates::IGetCertificatesUseCase, update_certificate::IUpdateCertificateUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub list: Arc<dyn IGetCertificatesUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateCertificateUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateCertificateUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCertificateUseCase + Send + Sync>,
}
