use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::TryStreamExt;
use std::collections::HashMap;

use crate::shared::api::ApiResponse;
use crate::uploads::application::domain::UploadKind;

/// A fully buffered upload, validated against the role's policy before
/// anything touches disk or the database.
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One file plus the plain-text fields that rode along with it
/// (certificate uploads carry `title` and `issuer` this way).
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<ReceivedFile>,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Unexpected field: {0}")]
    UnexpectedField(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("File is larger than 10MB")]
    FileTooLarge,

    #[error("Malformed multipart payload: {0}")]
    Malformed(String),
}

impl UploadError {
    /// Every policy violation maps to a 400 before any state mutation.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            UploadError::MissingFile => {
                ApiResponse::bad_request("NO_FILE_UPLOADED", "No file uploaded")
            }
            UploadError::UnexpectedField(_) | UploadError::Malformed(_) => {
                ApiResponse::bad_request("VALIDATION_ERROR", &self.to_string())
            }
            UploadError::UnsupportedMediaType(_) => {
                ApiResponse::bad_request("INVALID_FILE_TYPE", &self.to_string())
            }
            UploadError::FileTooLarge => {
                ApiResponse::bad_request("FILE_TOO_LARGE", &self.to_string())
            }
        }
    }
}

/// Drain a multipart payload expecting at most one file under the role's
/// field name. MIME and size violations reject here, before any disk write.
pub async fn read_upload_form(
    mut payload: Multipart,
    expected: UploadKind,
) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        let name = field.name().to_string();
        let file_name = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        match file_name {
            None => {
                // Plain text field.
                let mut value = Vec::new();
                while let Some(chunk) = field
                    .try_next()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?
                {
                    value.extend_from_slice(&chunk);
                }
                form.fields
                    .insert(name, String::from_utf8_lossy(&value).into_owned());
            }
            Some(original_name) => {
                if name != expected.field_name() {
                    return Err(UploadError::UnexpectedField(name));
                }
                if form.file.is_some() {
                    return Err(UploadError::UnexpectedField(format!(
                        "duplicate file field '{name}'"
                    )));
                }

                let content_type = field
                    .content_type()
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                if !expected.accepts(&content_type) {
                    return Err(UploadError::UnsupportedMediaType(
                        expected.rejection_message().to_string(),
                    ));
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field
                    .try_next()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?
                {
                    bytes.extend_from_slice(&chunk);
                    if bytes.len() > UploadKind::MAX_FILE_SIZE_BYTES {
                        return Err(UploadError::FileTooLarge);
                    }
                }

                form.file = Some(ReceivedFile {
                    original_name,
                    content_type,
                    bytes,
                });
            }
        }
    }

    Ok(form)
}

/// Variant for endpoints where the file is mandatory.
pub async fn read_required_upload(
    payload: Multipart,
    expected: UploadKind,
) -> Result<(ReceivedFile, HashMap<String, String>), UploadError> {
    let form = read_upload_form(payload, expected).await?;
    let file = form.file.ok_or(UploadError::MissingFile)?;
    Ok((file, form.fields))
}
