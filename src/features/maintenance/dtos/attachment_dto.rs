use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum attachment size in bytes (5MB)
pub const MAX_ATTACHMENT_SIZE: usize = 5 * 1024 * 1024;

/// Allowed MIME types for maintenance attachments
pub const ALLOWED_ATTACHMENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
];

/// Maximum number of files accepted in one upload batch
pub const MAX_ATTACHMENTS_PER_BATCH: usize = 5;

/// Why an individual file was rejected from an upload batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentRejection {
    TooLarge(usize),
    UnsupportedType(String),
}

impl std::fmt::Display for AttachmentRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentRejection::TooLarge(size) => write!(
                f,
                "file is {} bytes, maximum size is {} MB",
                size,
                MAX_ATTACHMENT_SIZE / 1024 / 1024
            ),
            AttachmentRejection::UnsupportedType(content_type) => write!(
                f,
                "unsupported format '{}', allowed formats: JPG, PNG, GIF, PDF",
                content_type
            ),
        }
    }
}

/// Validate a single file against the attachment rules. A violation fails
/// that file only, never the whole batch.
pub fn validate_attachment(
    content_type: &str,
    size: usize,
) -> Result<(), AttachmentRejection> {
    if size > MAX_ATTACHMENT_SIZE {
        return Err(AttachmentRejection::TooLarge(size));
    }
    if !ALLOWED_ATTACHMENT_TYPES.contains(&content_type) {
        return Err(AttachmentRejection::UnsupportedType(
            content_type.to_string(),
        ));
    }
    Ok(())
}

/// Get file extension from content type
pub fn get_extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

/// A file received in an upload batch
#[derive(Debug)]
pub struct IncomingFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Per-file outcome of an upload batch
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentUploadResultDto {
    pub file_name: String,
    pub success: bool,
    /// Set when the upload succeeded
    pub attachment_id: Option<Uuid>,
    /// Set when the upload failed
    pub error: Option<String>,
}

/// Batch upload response: independent per-file results, never atomic
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentBatchResponseDto {
    pub results: Vec<AttachmentUploadResultDto>,
    /// Names of files that failed, for a one-line error banner
    pub failed_files: Vec<String>,
}

/// Response DTO for an attachment in the detail view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentResponseDto {
    pub id: Uuid,
    pub request_id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub file_size: i64,
    /// Presigned URL for images, direct storage reference otherwise
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Response DTO for a signed attachment URL
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignedAttachmentUrlDto {
    pub url: String,
    pub expires_in_secs: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_jpeg_under_the_limit() {
        assert!(validate_attachment("image/jpeg", 2 * 1024 * 1024).is_ok());
    }

    #[test]
    fn rejects_an_oversized_png_for_size_not_type() {
        let err = validate_attachment("image/png", 6 * 1024 * 1024).unwrap_err();
        assert_eq!(err, AttachmentRejection::TooLarge(6 * 1024 * 1024));
    }

    #[test]
    fn rejects_an_executable_for_type() {
        let err = validate_attachment("application/x-msdownload", 1024).unwrap_err();
        assert!(matches!(err, AttachmentRejection::UnsupportedType(_)));
    }

    #[test]
    fn size_is_checked_before_type() {
        // An oversized file of a disallowed type reports the size violation
        let err = validate_attachment("application/x-msdownload", MAX_ATTACHMENT_SIZE + 1);
        assert!(matches!(err, Err(AttachmentRejection::TooLarge(_))));
    }

    #[test]
    fn extension_mapping_covers_allowed_types() {
        for content_type in ALLOWED_ATTACHMENT_TYPES {
            assert!(get_extension_from_content_type(content_type).is_some());
        }
        assert_eq!(get_extension_from_content_type("video/mp4"), None);
    }
}
