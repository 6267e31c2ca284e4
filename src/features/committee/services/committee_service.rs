use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::committee::models::CommitteeMember;

/// Service for the committee member listing
pub struct CommitteeService {
    pool: PgPool,
}

impl CommitteeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List committee members in display order
    pub async fn list(&self) -> Result<Vec<CommitteeMember>> {
        sqlx::query_as::<_, CommitteeMember>(
            "SELECT * FROM committee_members ORDER BY sort_order ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list committee members: {:?}", e);
            AppError::Database(e)
        })
    }
}
