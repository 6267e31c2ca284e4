use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::rate_limits::models::RateLimitConfig;

/// Config key for the daily per-resident request creation cap
pub const DAILY_REQUEST_LIMIT_KEY: &str = "daily_request_limit";

/// Fallback when the config row is missing
const DEFAULT_DAILY_REQUEST_LIMIT: i32 = 10;

/// Service for reading and updating rate limit configuration
pub struct RateLimitConfigService {
    pool: PgPool,
}

impl RateLimitConfigService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the daily request creation limit
    pub async fn get_daily_request_limit(&self) -> Result<i32> {
        let value: Option<i32> =
            sqlx::query_scalar("SELECT value FROM rate_limit_configs WHERE key = $1")
                .bind(DAILY_REQUEST_LIMIT_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to read rate limit config: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(value.unwrap_or(DEFAULT_DAILY_REQUEST_LIMIT))
    }

    /// List all configuration rows
    pub async fn list(&self) -> Result<Vec<RateLimitConfig>> {
        sqlx::query_as::<_, RateLimitConfig>(
            "SELECT * FROM rate_limit_configs ORDER BY key ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list rate limit configs: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Update a configuration row
    pub async fn update(&self, key: &str, value: i32) -> Result<RateLimitConfig> {
        let config = sqlx::query_as::<_, RateLimitConfig>(
            r#"
            UPDATE rate_limit_configs
            SET value = $2, updated_at = NOW()
            WHERE key = $1
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update rate limit config: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Rate limit config '{}' not found", key)))?;

        tracing::info!("Rate limit config '{}' set to {}", key, value);
        Ok(config)
    }
}
