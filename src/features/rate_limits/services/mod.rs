mod rate_limit_config_service;
mod rate_limit_service;

pub use rate_limit_config_service::{RateLimitConfigService, DAILY_REQUEST_LIMIT_KEY};
pub use rate_limit_service::RateLimitService;
