use std::time::Duration;

use crate::core::AppConfig;
use crate::google::PlacesClient;
use crate::limit::RateLimiter;

pub struct AppState {
    pub config: AppConfig,
    pub limiter: RateLimiter,
    pub places: PlacesClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let limiter = RateLimiter::new(
            config.rate_limit,
            Duration::from_millis(config.rate_limit_window_ms),
        );
        let places = PlacesClient::from_config(&config);
        Self {
            config,
            limiter,
            places,
        }
    }
}
