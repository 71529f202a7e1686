use async_trait::async_trait;

use crate::certificates::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError, CertificateView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCertificatesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CertificateRepositoryError> for GetCertificatesError {
    fn from(err: CertificateRepositoryError) -> Self {
        GetCertificatesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait IGetCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError>;
}

pub struct GetCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> GetCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetCertificatesUseCase for GetCertificatesUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError> {
        self.repo.list().await.map_err(GetCertificatesError::from)
    }
}
