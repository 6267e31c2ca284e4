use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::documents::dtos::{
    is_document_type_allowed, DocumentDownloadUrlDto, DocumentListQuery, DocumentResponseDto,
    UploadDocumentDto, ALLOWED_DOCUMENT_TYPES, MAX_DOCUMENT_SIZE,
};
use crate::features::documents::models::DocumentCategory;
use crate::features::documents::services::DocumentService;
use crate::shared::types::ApiResponse;

/// Upload a strata document (committee only)
///
/// Accepts multipart/form-data with:
/// - `file`: The document to upload (required)
/// - `title`: Title shown in the repository listing (required)
/// - `category`: insurance, rules, minutes, financial or other (required)
#[utoipa::path(
    post,
    path = "/api/documents/upload",
    request_body(
        content = UploadDocumentDto,
        content_type = "multipart/form-data",
        description = "Document upload form with title and category fields",
    ),
    responses(
        (status = 201, description = "Document uploaded", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Invalid file or missing fields"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires committee access"),
        (status = 413, description = "File too large")
    ),
    security(("bearer_auth" = [])),
    tag = "documents"
)]
pub async fn upload_document(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>)> {
    if !user.has_committee_access() {
        return Err(AppError::Forbidden(
            "Requires committee access".to_string(),
        ));
    }

    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut title: Option<String> = None;
    let mut category: Option<DocumentCategory> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "title" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read title field: {}", e))
                })?;
                if !text.is_empty() {
                    title = Some(text);
                }
            }
            "category" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read category field: {}", e))
                })?;
                category = match text.to_lowercase().as_str() {
                    "insurance" => Some(DocumentCategory::Insurance),
                    "rules" => Some(DocumentCategory::Rules),
                    "minutes" => Some(DocumentCategory::Minutes),
                    "financial" => Some(DocumentCategory::Financial),
                    "other" => Some(DocumentCategory::Other),
                    other => {
                        return Err(AppError::BadRequest(format!(
                            "Unknown document category '{}'",
                            other
                        )))
                    }
                };
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Validate required fields
    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;
    let title = title.ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;
    let category =
        category.ok_or_else(|| AppError::BadRequest("Category is required".to_string()))?;

    // Validate file size
    if file_data.len() > MAX_DOCUMENT_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_DOCUMENT_SIZE,
            MAX_DOCUMENT_SIZE / 1024 / 1024
        )));
    }

    // Validate MIME type
    if !is_document_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_DOCUMENT_TYPES.join(", ")
        )));
    }

    let response = service
        .upload(
            &title,
            category,
            &file_name,
            &content_type,
            file_data,
            &user.sub,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(response),
            Some("Document uploaded successfully".to_string()),
            None,
        )),
    ))
}

/// List documents, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "List of documents", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "documents"
)]
pub async fn list_documents(
    _user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>> {
    let documents = service.list(query.category).await?;
    let dtos: Vec<DocumentResponseDto> = documents.into_iter().map(|d| d.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a short-lived signed download URL for a document
#[utoipa::path(
    get,
    path = "/api/documents/{id}/download-url",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Signed download URL", body = ApiResponse<DocumentDownloadUrlDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Document not found")
    ),
    security(("bearer_auth" = [])),
    tag = "documents"
)]
pub async fn get_download_url(
    _user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<DocumentDownloadUrlDto>>> {
    let url = service.download_url(id).await?;
    Ok(Json(ApiResponse::success(Some(url), None, None)))
}
