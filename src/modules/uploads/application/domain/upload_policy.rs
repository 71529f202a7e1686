/// The role a file plays in an upload request. The role fixes the multipart
/// field name and the MIME types the request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Resume,
    Photo,
    ProjectImage,
    CertificateFile,
}

impl UploadKind {
    /// One cap for every role.
    pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

    pub fn field_name(&self) -> &'static str {
        match self {
            UploadKind::Resume => "resume",
            UploadKind::Photo => "photo",
            UploadKind::ProjectImage => "image",
            UploadKind::CertificateFile => "file",
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            UploadKind::Resume => content_type == "application/pdf",
            UploadKind::Photo | UploadKind::ProjectImage | UploadKind::CertificateFile => {
                content_type.starts_with("image/") || content_type == "application/pdf"
            }
        }
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            UploadKind::Resume => "Only PDF files are allowed for resume",
            _ => "Only image and PDF files are allowed",
        }
    }
}
