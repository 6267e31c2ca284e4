use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::documents::dtos::MAX_DOCUMENT_SIZE;
use crate::features::documents::handlers::document_handler;
use crate::features::documents::services::DocumentService;

/// Create routes for the documents feature
///
/// All routes require the bearer-auth middleware to be applied by the caller
pub fn routes(document_service: Arc<DocumentService>) -> Router {
    Router::new()
        .route(
            "/api/documents/upload",
            // Allow body size up to MAX_DOCUMENT_SIZE + buffer for multipart overhead
            post(document_handler::upload_document)
                .layer(DefaultBodyLimit::max(MAX_DOCUMENT_SIZE + 1024 * 1024)),
        )
        .route("/api/documents", get(document_handler::list_documents))
        .route(
            "/api/documents/{id}/download-url",
            get(document_handler::get_download_url),
        )
        .with_state(document_service)
}
