use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::budget::dtos::{AddExpenseDto, AddIncomeDto, BudgetLedgerDto};
use crate::features::budget::services::BudgetService;
use crate::shared::types::ApiResponse;

/// Get the caller's budget ledger
#[utoipa::path(
    get,
    path = "/api/budget",
    responses(
        (status = 200, description = "Current ledger", body = ApiResponse<BudgetLedgerDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "budget"
)]
pub async fn get_ledger(
    user: AuthenticatedUser,
    State(service): State<Arc<BudgetService>>,
) -> Result<Json<ApiResponse<BudgetLedgerDto>>> {
    Ok(Json(ApiResponse::success(
        Some(service.get(&user.sub)),
        None,
        None,
    )))
}

/// Add an income entry
#[utoipa::path(
    post,
    path = "/api/budget/income",
    request_body = AddIncomeDto,
    responses(
        (status = 200, description = "Updated ledger", body = ApiResponse<BudgetLedgerDto>),
        (status = 400, description = "Invalid entry"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "budget"
)]
pub async fn add_income(
    user: AuthenticatedUser,
    State(service): State<Arc<BudgetService>>,
    AppJson(dto): AppJson<AddIncomeDto>,
) -> Result<Json<ApiResponse<BudgetLedgerDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ledger = service.add_income(&user.sub, &dto)?;
    Ok(Json(ApiResponse::success(Some(ledger), None, None)))
}

/// Add an expense entry
#[utoipa::path(
    post,
    path = "/api/budget/expenses",
    request_body = AddExpenseDto,
    responses(
        (status = 200, description = "Updated ledger", body = ApiResponse<BudgetLedgerDto>),
        (status = 400, description = "Invalid entry"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "budget"
)]
pub async fn add_expense(
    user: AuthenticatedUser,
    State(service): State<Arc<BudgetService>>,
    AppJson(dto): AppJson<AddExpenseDto>,
) -> Result<Json<ApiResponse<BudgetLedgerDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ledger = service.add_expense(&user.sub, &dto)?;
    Ok(Json(ApiResponse::success(Some(ledger), None, None)))
}

/// Clear the caller's ledger
#[utoipa::path(
    delete,
    path = "/api/budget",
    responses(
        (status = 200, description = "Ledger cleared"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "budget"
)]
pub async fn clear_ledger(
    user: AuthenticatedUser,
    State(service): State<Arc<BudgetService>>,
) -> Result<Json<ApiResponse<()>>> {
    service.clear(&user.sub);
    Ok(Json(ApiResponse::success(
        None,
        Some("Budget cleared".to_string()),
        None,
    )))
}
