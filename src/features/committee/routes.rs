use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::committee::handlers::committee_handler;
use crate::features::committee::services::CommitteeService;

/// Create routes for the committee feature (public)
pub fn routes(committee_service: Arc<CommitteeService>) -> Router {
    Router::new()
        .route("/api/committee", get(committee_handler::list_committee))
        .with_state(committee_service)
}
