use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::maintenance::dtos::{
    CreateMaintenanceRequestDto, MaintenanceRequestResponseDto, RequestCountsDto,
    RequestDetailResponseDto, RequestListQuery, UpdateRequestStatusDto,
};
use crate::features::maintenance::services::{AttachmentService, RequestService};
use crate::features::rate_limits::RateLimitService;
use crate::shared::types::ApiResponse;

/// State for maintenance handlers
#[derive(Clone)]
pub struct MaintenanceState {
    pub request_service: Arc<RequestService>,
    pub attachment_service: Arc<AttachmentService>,
    pub rate_limit_service: Arc<RateLimitService>,
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/api/maintenance",
    request_body = CreateMaintenanceRequestDto,
    responses(
        (status = 201, description = "Request created", body = ApiResponse<MaintenanceRequestResponseDto>),
        (status = 400, description = "Missing or malformed fields"),
        (status = 401, description = "Unauthorized"),
        (status = 429, description = "Daily request limit reached")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn create_request(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    AppJson(dto): AppJson<CreateMaintenanceRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRequestResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !state.rate_limit_service.can_create(&user.sub).await? {
        return Err(AppError::RateLimitExceeded(
            "Daily maintenance request limit reached, try again tomorrow".to_string(),
        ));
    }

    let request = state.request_service.create(&dto, &user.sub).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(request.into()),
            Some("Maintenance request submitted successfully".to_string()),
            None,
        )),
    ))
}

/// List the authenticated resident's requests (active or completed)
#[utoipa::path(
    get,
    path = "/api/maintenance",
    params(RequestListQuery),
    responses(
        (status = 200, description = "List of requests", body = ApiResponse<Vec<MaintenanceRequestResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn list_requests(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    Query(query): Query<RequestListQuery>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRequestResponseDto>>>> {
    let requests = state
        .request_service
        .list_by_user(&user.sub, query.status)
        .await?;
    let dtos: Vec<MaintenanceRequestResponseDto> =
        requests.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Per-status counts over the resident's full request set
#[utoipa::path(
    get,
    path = "/api/maintenance/summary",
    responses(
        (status = 200, description = "Request counts", body = ApiResponse<RequestCountsDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn request_summary(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
) -> Result<Json<ApiResponse<RequestCountsDto>>> {
    let counts = state.request_service.counts_by_user(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(counts), None, None)))
}

/// Get a request with its attachments
#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ApiResponse<RequestDetailResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn get_request(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<RequestDetailResponseDto>>> {
    let request = state.request_service.get_for_user(id, &user).await?;
    let attachments = state.attachment_service.list_for_request(id).await?;

    let dto = RequestDetailResponseDto {
        request: request.into(),
        attachments,
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Update a request's status
#[utoipa::path(
    patch,
    path = "/api/maintenance/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<MaintenanceRequestResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Invalid status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "maintenance"
)]
pub async fn update_request_status(
    user: AuthenticatedUser,
    State(state): State<MaintenanceState>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateRequestStatusDto>,
) -> Result<Json<ApiResponse<MaintenanceRequestResponseDto>>> {
    let request = state
        .request_service
        .update_status(id, &dto, &user)
        .await?;
    Ok(Json(ApiResponse::success(Some(request.into()), None, None)))
}
