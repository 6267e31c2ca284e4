use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a committee member
#[derive(Debug, Clone, FromRow)]
pub struct CommitteeMember {
    pub id: Uuid,
    pub role: String,
    pub name: String,
    pub email: String,
    pub responsibilities: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
