use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::roll::handlers::roll_handler;
use crate::features::roll::services::RollService;

/// Create routes for the strata roll feature
///
/// All routes require the bearer-auth middleware to be applied by the caller;
/// handlers additionally check for committee access.
pub fn routes(roll_service: Arc<RollService>) -> Router {
    Router::new()
        .route("/api/roll", get(roll_handler::list_roll))
        .route("/api/roll/summary", get(roll_handler::roll_summary))
        .with_state(roll_service)
}
