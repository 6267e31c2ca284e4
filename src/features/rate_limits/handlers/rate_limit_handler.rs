use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::rate_limits::dtos::{
    RateLimitConfigResponseDto, UpdateRateLimitConfigDto, UserRateLimitStatusDto,
};
use crate::features::rate_limits::services::{RateLimitConfigService, RateLimitService};
use crate::shared::types::ApiResponse;

/// State for rate limit handlers
#[derive(Clone)]
pub struct RateLimitState {
    pub rate_limit_service: Arc<RateLimitService>,
    pub config_service: Arc<RateLimitConfigService>,
}

/// Get the authenticated resident's rate limit status for today
#[utoipa::path(
    get,
    path = "/api/rate-limits/status",
    responses(
        (status = 200, description = "Rate limit status", body = ApiResponse<UserRateLimitStatusDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "rate-limits"
)]
pub async fn get_rate_limit_status(
    user: AuthenticatedUser,
    State(state): State<RateLimitState>,
) -> Result<Json<ApiResponse<UserRateLimitStatusDto>>> {
    let status = state.rate_limit_service.get_user_status(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(status), None, None)))
}

/// List rate limit configuration (building manager only)
#[utoipa::path(
    get,
    path = "/api/rate-limits/config",
    responses(
        (status = 200, description = "Configuration rows", body = ApiResponse<Vec<RateLimitConfigResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires building manager role")
    ),
    security(("bearer_auth" = [])),
    tag = "rate-limits"
)]
pub async fn list_rate_limit_configs(
    user: AuthenticatedUser,
    State(state): State<RateLimitState>,
) -> Result<Json<ApiResponse<Vec<RateLimitConfigResponseDto>>>> {
    if !user.is_building_manager() {
        return Err(AppError::Forbidden(
            "Requires building manager role".to_string(),
        ));
    }

    let configs = state.config_service.list().await?;
    let dtos: Vec<RateLimitConfigResponseDto> = configs.into_iter().map(|c| c.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Update a rate limit configuration row (building manager only)
#[utoipa::path(
    patch,
    path = "/api/rate-limits/config/{key}",
    params(
        ("key" = String, Path, description = "Configuration key")
    ),
    request_body = UpdateRateLimitConfigDto,
    responses(
        (status = 200, description = "Configuration updated", body = ApiResponse<RateLimitConfigResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires building manager role"),
        (status = 404, description = "Unknown configuration key")
    ),
    security(("bearer_auth" = [])),
    tag = "rate-limits"
)]
pub async fn update_rate_limit_config(
    user: AuthenticatedUser,
    State(state): State<RateLimitState>,
    Path(key): Path<String>,
    AppJson(dto): AppJson<UpdateRateLimitConfigDto>,
) -> Result<Json<ApiResponse<RateLimitConfigResponseDto>>> {
    if !user.is_building_manager() {
        return Err(AppError::Forbidden(
            "Requires building manager role".to_string(),
        ));
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let config = state.config_service.update(&key, dto.value).await?;
    Ok(Json(ApiResponse::success(Some(config.into()), None, None)))
}
