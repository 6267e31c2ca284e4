use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contact::handlers::contact_handler;
use crate::features::contact::services::ContactService;

/// Public route: submit a contact message
pub fn public_routes(contact_service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(contact_handler::create_contact_message))
        .with_state(contact_service)
}

/// Protected route: committee inbox
pub fn protected_routes(contact_service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact/messages",
            get(contact_handler::list_contact_messages),
        )
        .with_state(contact_service)
}
