use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::DashboardSummaryDto;

/// Service for the resident dashboard summary
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Summary cards for the authenticated resident: their request counts
    /// plus repository-wide document numbers
    pub async fn get_summary(&self, user_id: &str) -> Result<DashboardSummaryDto> {
        let (pending, in_progress, resolved): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'pending'),
                COUNT(*) FILTER (WHERE status = 'in_progress'),
                COUNT(*) FILTER (WHERE status = 'resolved')
            FROM maintenance_requests
            WHERE requested_by = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get request summary counts: {:?}", e);
            AppError::Database(e)
        })?;

        let (total_documents, documents_this_week): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE created_at >= date_trunc('week', CURRENT_DATE))
            FROM documents
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get document summary counts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(DashboardSummaryDto {
            active_requests: pending + in_progress,
            pending_requests: pending,
            in_progress_requests: in_progress,
            resolved_requests: resolved,
            total_documents,
            documents_this_week,
        })
    }
}
