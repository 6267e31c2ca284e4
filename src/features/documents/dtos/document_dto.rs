use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::documents::models::{Document, DocumentCategory};

/// Allowed MIME types for document uploads
pub const ALLOWED_DOCUMENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// Maximum document size in bytes (10MB)
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Check if a MIME type is allowed for documents
pub fn is_document_type_allowed(content_type: &str) -> bool {
    ALLOWED_DOCUMENT_TYPES.contains(&content_type)
}

/// Upload document request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentDto {
    /// The document file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Document title shown in the repository listing
    pub title: String,
    /// Document category
    #[schema(example = "insurance")]
    pub category: String,
}

/// Query parameters for the document list
#[derive(Debug, Deserialize, IntoParams)]
pub struct DocumentListQuery {
    /// Restrict the listing to one category
    pub category: Option<DocumentCategory>,
}

/// Response DTO for a document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub category: DocumentCategory,
    pub content_type: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponseDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            title: d.title,
            category: d.category,
            content_type: d.content_type,
            file_size: d.file_size,
            created_at: d.created_at,
        }
    }
}

/// Response DTO for a document download URL
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentDownloadUrlDto {
    pub url: String,
    pub expires_in_secs: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_and_images_are_allowed() {
        assert!(is_document_type_allowed("application/pdf"));
        assert!(is_document_type_allowed("image/jpeg"));
        assert!(is_document_type_allowed("image/png"));
        assert!(!is_document_type_allowed("application/zip"));
        assert!(!is_document_type_allowed("text/html"));
    }
}
