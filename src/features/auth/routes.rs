use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::auth::events::IdentityEvents;
use crate::features::auth::handlers;

/// Create routes for the auth feature
///
/// All routes require the bearer-auth middleware to be applied by the caller
pub fn routes(identity_events: Arc<IdentityEvents>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .route("/api/auth/sign-out", post(handlers::sign_out))
        .with_state(identity_events)
}
