use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A certificate as clients see it. `fileType` tells the front end how to
/// render the file without re-inspecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateView {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub file_url: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCertificateRecord {
    pub title: String,
    pub issuer: String,
    pub file_url: String,
    pub file_type: String,
}

/// Partial update; `file` replaces both url and type together.
#[derive(Debug, Clone, Default)]
pub struct CertificateUpdate {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub file: Option<(String, String)>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<CertificateView>, CertificateRepositoryError>;

    async fn find_by_id(&self, id: Uuid)
        -> Result<CertificateView, CertificateRepositoryError>;

    async fn insert(
        &self,
        record: NewCertificateRecord,
    ) -> Result<CertificateView, CertificateRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        update: CertificateUpdate,
    ) -> Result<CertificateView, CertificateRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
