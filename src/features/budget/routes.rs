use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::budget::handlers::budget_handler;
use crate::features::budget::services::BudgetService;

/// Create routes for the budget feature
///
/// All routes require the bearer-auth middleware to be applied by the caller
pub fn routes(budget_service: Arc<BudgetService>) -> Router {
    Router::new()
        .route(
            "/api/budget",
            get(budget_handler::get_ledger).delete(budget_handler::clear_ledger),
        )
        .route("/api/budget/income", post(budget_handler::add_income))
        .route("/api/budget/expenses", post(budget_handler::add_expense))
        .with_state(budget_service)
}
