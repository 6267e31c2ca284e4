use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::roll::dtos::{RollListQuery, RollSummaryDto, UnitResponseDto};
use crate::features::roll::services::RollService;
use crate::shared::types::ApiResponse;

/// List the strata roll (committee only - contains owner contact details)
#[utoipa::path(
    get,
    path = "/api/roll",
    params(RollListQuery),
    responses(
        (status = 200, description = "Roll entries", body = ApiResponse<Vec<UnitResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires committee access")
    ),
    security(("bearer_auth" = [])),
    tag = "roll"
)]
pub async fn list_roll(
    user: AuthenticatedUser,
    State(service): State<Arc<RollService>>,
    Query(query): Query<RollListQuery>,
) -> Result<Json<ApiResponse<Vec<UnitResponseDto>>>> {
    if !user.has_committee_access() {
        return Err(AppError::Forbidden(
            "Requires committee access".to_string(),
        ));
    }

    let units = service
        .list(query.search.as_deref(), query.occupancy)
        .await?;
    let dtos: Vec<UnitResponseDto> = units.into_iter().map(|u| u.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Summary over the whole roll (committee only)
#[utoipa::path(
    get,
    path = "/api/roll/summary",
    responses(
        (status = 200, description = "Roll summary", body = ApiResponse<RollSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Requires committee access")
    ),
    security(("bearer_auth" = [])),
    tag = "roll"
)]
pub async fn roll_summary(
    user: AuthenticatedUser,
    State(service): State<Arc<RollService>>,
) -> Result<Json<ApiResponse<RollSummaryDto>>> {
    if !user.has_committee_access() {
        return Err(AppError::Forbidden(
            "Requires committee access".to_string(),
        ));
    }

    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
