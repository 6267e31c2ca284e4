use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit a contact form message (public)
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message received", body = ApiResponse<ContactMessageResponseDto>),
        (status = 400, description = "Missing or malformed fields")
    ),
    tag = "contact"
)]
pub async fn create_contact_message(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactMessageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.create(&dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(message.into()),
            Some("Message sent successfully".to_string()),
            None,
        )),
    ))
}

/// List contact messages (committee only)
#[utoipa::path(
    get,
    path = "/api/contact/messages",
    responses(
        (status = 200, description = "Contact messages", body = ApiResponse<Vec<ContactMessageResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires committee access")
    ),
    security(("bearer_auth" = [])),
    tag = "contact"
)]
pub async fn list_contact_messages(
    user: AuthenticatedUser,
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactMessageResponseDto>>>> {
    if !user.has_committee_access() {
        return Err(AppError::Forbidden(
            "Requires committee access".to_string(),
        ));
    }

    let messages = service.list().await?;
    let dtos: Vec<ContactMessageResponseDto> = messages.into_iter().map(|m| m.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
