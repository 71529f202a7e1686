use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::uploads::application::domain::UploadKind;
use crate::uploads::application::ports::outgoing::{FileStore, FileStoreError, StoredFile};

pub const PUBLIC_PREFIX: &str = "/uploads";

/// Local-disk file store serving uploads statically under `/uploads`.
///
/// Names follow the `<field>-<millis>-<random9><ext>` convention so a
/// replaced file never collides with its predecessor.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    fn unique_file_name(kind: UploadKind, original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

        format!("{}-{}-{}{}", kind.field_name(), millis, suffix, ext)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(
        &self,
        kind: UploadKind,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, FileStoreError> {
        let file_name = Self::unique_file_name(kind, original_name);
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FileStoreError::WriteFailed(e.to_string()))?;

        Ok(StoredFile {
            url: format!("{}/{}", PUBLIC_PREFIX, file_name),
            file_name,
        })
    }

    async fn remove(&self, url: &str) {
        // Only the final path component is honored, so a stored URL can never
        // escape the upload directory.
        let file_name = match Path::new(url).file_name() {
            Some(name) => name.to_owned(),
            None => {
                warn!(url, "Refusing to remove file: no file name in URL");
                return;
            }
        };

        let path = self.root.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => debug!(?path, "Removed stale upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "Stale upload already gone")
            }
            Err(e) => warn!(?path, error = %e, "Failed to remove stale upload"),
        }
    }
}
