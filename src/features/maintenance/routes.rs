use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::features::maintenance::dtos::{MAX_ATTACHMENTS_PER_BATCH, MAX_ATTACHMENT_SIZE};
use crate::features::maintenance::handlers::{attachment_handler, request_handler};
use crate::features::maintenance::handlers::MaintenanceState;
use crate::features::maintenance::services::{AttachmentService, RequestService};
use crate::features::rate_limits::RateLimitService;

/// Create routes for the maintenance feature
///
/// All routes require the bearer-auth middleware to be applied by the caller
pub fn routes(
    request_service: Arc<RequestService>,
    attachment_service: Arc<AttachmentService>,
    rate_limit_service: Arc<RateLimitService>,
) -> Router {
    let state = MaintenanceState {
        request_service,
        attachment_service,
        rate_limit_service,
    };

    Router::new()
        .route(
            "/api/maintenance",
            post(request_handler::create_request).get(request_handler::list_requests),
        )
        .route(
            "/api/maintenance/summary",
            get(request_handler::request_summary),
        )
        .route("/api/maintenance/{id}", get(request_handler::get_request))
        .route(
            "/api/maintenance/{id}/status",
            patch(request_handler::update_request_status),
        )
        .route(
            "/api/maintenance/{id}/attachments",
            // Body limit covers a full batch plus multipart overhead; an
            // individual oversized file still gets its per-file rejection
            post(attachment_handler::upload_attachments).layer(DefaultBodyLimit::max(
                MAX_ATTACHMENT_SIZE * (MAX_ATTACHMENTS_PER_BATCH + 1) + 1024 * 1024,
            )),
        )
        .route(
            "/api/maintenance/attachments/{id}/url",
            get(attachment_handler::get_attachment_url),
        )
        .with_state(state)
}
