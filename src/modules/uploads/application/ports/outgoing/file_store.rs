use async_trait::async_trait;

use crate::uploads::application::domain::UploadKind;

/// A file the store has accepted and made reachable over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub file_name: String,
    /// Relative path clients use, e.g. `/uploads/resume-1717920000000-123456789.pdf`.
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("File write failed: {0}")]
    WriteFailed(String),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist the bytes under a unique name derived from the upload role,
    /// preserving the original extension.
    async fn store(
        &self,
        kind: UploadKind,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, FileStoreError>;

    /// Best-effort removal by public URL. A missing file is not an error and
    /// failures must never propagate to the caller.
    async fn remove(&self, url: &str);
}
