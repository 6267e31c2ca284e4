use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers::dashboard_handler;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
///
/// Requires the bearer-auth middleware to be applied by the caller
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route(
            "/api/dashboard/summary",
            get(dashboard_handler::get_summary),
        )
        .with_state(dashboard_service)
}
