use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::maintenance::dtos::{
    AttachmentBatchResponseDto, IncomingFile, SignedAttachmentUrlDto, MAX_ATTACHMENTS_PER_BATCH,
};
use crate::features::maintenance::handlers::MaintenanceState;
use crate::shared::types::ApiResponse;

/// Upload attachments for a request
///
/// Accepts multipart/form-data with one or more `files` parts. Files are
/// validated and uploaded independently; the response reports a result per
/// file rather than failing the batch.
#[utoipa::path(
    post,
    path = "/api/maintenance/{id}/attachments",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Per-file upload results", body = ApiResponse<AttachmentBatchResponseDto>),
        (status = 400, description = "Malformed multipart body or empty batch"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Request belongs to another resident"),
        (status = 404, description = "Request not found"),
        (status = 413, description = "Multipart body too large")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn upload_attachments(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    Path(id): Path<uuid::Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<AttachmentBatchResponseDto>>> {
    let mut files: Vec<IncomingFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "files" | "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                files.push(IncomingFile {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(
            "At least one file is required".to_string(),
        ));
    }
    if files.len() > MAX_ATTACHMENTS_PER_BATCH {
        return Err(AppError::BadRequest(format!(
            "At most {} files may be uploaded per batch",
            MAX_ATTACHMENTS_PER_BATCH
        )));
    }

    let batch = state
        .attachment_service
        .attach_files(id, &user, files)
        .await?;

    let message = if batch.failed_files.is_empty() {
        None
    } else {
        Some(format!(
            "Some files failed to upload: {}",
            batch.failed_files.join(", ")
        ))
    };

    Ok(Json(ApiResponse::success(Some(batch), message, None)))
}

/// Get a short-lived signed URL for an attachment
#[utoipa::path(
    get,
    path = "/api/maintenance/attachments/{id}/url",
    params(
        ("id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Signed URL", body = ApiResponse<SignedAttachmentUrlDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Attachment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn get_attachment_url(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<SignedAttachmentUrlDto>>> {
    let signed = state.attachment_service.signed_url(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(signed), None, None)))
}
