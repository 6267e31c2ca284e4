use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a maintenance attachment
#[derive(Debug, Clone, FromRow)]
pub struct Attachment {
    pub id: Uuid,
    pub request_id: Uuid,
    pub file_name: String,
    pub file_key: String,
    pub content_type: String,
    pub file_size: i64,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}
