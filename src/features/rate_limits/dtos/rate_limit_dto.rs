use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::rate_limits::models::RateLimitConfig;

/// Response DTO for a rate limit configuration row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RateLimitConfigResponseDto {
    pub key: String,
    pub value: i32,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<RateLimitConfig> for RateLimitConfigResponseDto {
    fn from(c: RateLimitConfig) -> Self {
        Self {
            key: c.key,
            value: c.value,
            description: c.description,
            updated_at: c.updated_at,
        }
    }
}

/// Update DTO for a rate limit configuration row
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRateLimitConfigDto {
    #[validate(range(min = 1, max = 1000, message = "value must be between 1 and 1000"))]
    pub value: i32,
}

/// A resident's rate limit usage for today
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserRateLimitStatusDto {
    pub requests_used: i64,
    pub requests_remaining: i64,
    pub max_requests: i64,
    pub can_create: bool,
    pub resets_at: DateTime<Utc>,
}
