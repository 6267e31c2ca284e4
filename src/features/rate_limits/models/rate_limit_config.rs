use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a rate limit configuration row
#[derive(Debug, Clone, FromRow)]
pub struct RateLimitConfig {
    pub key: String,
    pub value: i32,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}
