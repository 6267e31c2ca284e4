use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::rate_limits::handlers::{rate_limit_handler, RateLimitState};
use crate::features::rate_limits::services::{RateLimitConfigService, RateLimitService};

/// Create routes for the rate limits feature
///
/// All routes require the bearer-auth middleware to be applied by the caller;
/// the config routes additionally check for the building manager role.
pub fn routes(
    rate_limit_service: Arc<RateLimitService>,
    config_service: Arc<RateLimitConfigService>,
) -> Router {
    let state = RateLimitState {
        rate_limit_service,
        config_service,
    };

    Router::new()
        .route(
            "/api/rate-limits/status",
            get(rate_limit_handler::get_rate_limit_status),
        )
        .route(
            "/api/rate-limits/config",
            get(rate_limit_handler::list_rate_limit_configs),
        )
        .route(
            "/api/rate-limits/config/{key}",
            patch(rate_limit_handler::update_rate_limit_config),
        )
        .with_state(state)
}
