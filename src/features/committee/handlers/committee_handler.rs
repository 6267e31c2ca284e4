use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::committee::dtos::CommitteeMemberResponseDto;
use crate::features::committee::services::CommitteeService;
use crate::shared::types::ApiResponse;

/// List strata committee members (public)
#[utoipa::path(
    get,
    path = "/api/committee",
    responses(
        (status = 200, description = "Committee members", body = ApiResponse<Vec<CommitteeMemberResponseDto>>)
    ),
    tag = "committee"
)]
pub async fn list_committee(
    State(service): State<Arc<CommitteeService>>,
) -> Result<Json<ApiResponse<Vec<CommitteeMemberResponseDto>>>> {
    let members = service.list().await?;
    let dtos: Vec<CommitteeMemberResponseDto> = members.into_iter().map(|m| m.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
