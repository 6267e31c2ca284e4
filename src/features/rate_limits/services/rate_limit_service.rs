use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::rate_limits::dtos::UserRateLimitStatusDto;
use crate::features::rate_limits::services::RateLimitConfigService;

/// Get the start and end of the day containing `now` in Sydney standard time
/// (UTC+10), converted to UTC
fn sydney_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let aest = FixedOffset::east_opt(10 * 3600).expect("Invalid AEST offset");
    let now_aest = now.with_timezone(&aest);

    // Start of today in AEST (00:00:00)
    let start_of_day_aest = aest
        .with_ymd_and_hms(now_aest.year(), now_aest.month(), now_aest.day(), 0, 0, 0)
        .single()
        .expect("Invalid AEST date");

    let start_utc = start_of_day_aest.with_timezone(&Utc);
    let end_utc = (start_of_day_aest + chrono::Duration::days(1)).with_timezone(&Utc);

    (start_utc, end_utc)
}

/// Service for checking and enforcing the daily request creation limit
pub struct RateLimitService {
    pool: PgPool,
    config_service: Arc<RateLimitConfigService>,
}

impl RateLimitService {
    pub fn new(pool: PgPool, config_service: Arc<RateLimitConfigService>) -> Self {
        Self {
            pool,
            config_service,
        }
    }

    /// Count requests created by the user today (Sydney time)
    pub async fn count_user_requests_today(&self, user_id: &str) -> Result<i64> {
        let (start_utc, end_utc) = sydney_day_bounds(Utc::now());

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM maintenance_requests
            WHERE requested_by = $1
              AND created_at >= $2
              AND created_at < $3
            "#,
        )
        .bind(user_id)
        .bind(start_utc)
        .bind(end_utc)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count user requests today: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count)
    }

    /// Check if the user may create another request today
    pub async fn can_create(&self, user_id: &str) -> Result<bool> {
        let limit = self.config_service.get_daily_request_limit().await?;
        let count = self.count_user_requests_today(user_id).await?;

        Ok(count < limit as i64)
    }

    /// Get the user's rate limit status
    pub async fn get_user_status(&self, user_id: &str) -> Result<UserRateLimitStatusDto> {
        let limit = self.config_service.get_daily_request_limit().await?;
        let requests_used = self.count_user_requests_today(user_id).await?;
        let max_requests = limit as i64;
        let requests_remaining = (max_requests - requests_used).max(0);
        let can_create = requests_used < max_requests;
        let (_, resets_at) = sydney_day_bounds(Utc::now());

        Ok(UserRateLimitStatusDto {
            requests_used,
            requests_remaining,
            max_requests,
            can_create,
            resets_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 3, 30, 0).unwrap();
        let (start, end) = sydney_day_bounds(now);
        assert_eq!(end - start, chrono::Duration::days(1));
        assert!(start <= now && now < end);
    }

    #[test]
    fn day_boundary_is_sydney_midnight_not_utc() {
        // 15:00 UTC is 01:00 next day in Sydney, so the Sydney day starts
        // at 14:00 UTC
        let now = Utc.with_ymd_and_hms(2025, 6, 14, 15, 0, 0).unwrap();
        let (start, _) = sydney_day_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 14, 14, 0, 0).unwrap());
    }
}
