use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary numbers behind the landing page cards, scoped to the caller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    /// The caller's open requests (pending + in progress)
    pub active_requests: i64,
    pub pending_requests: i64,
    pub in_progress_requests: i64,
    pub resolved_requests: i64,
    /// Documents in the repository
    pub total_documents: i64,
    /// Documents uploaded since the start of this week
    pub documents_this_week: i64,
}
