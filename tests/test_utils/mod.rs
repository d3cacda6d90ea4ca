//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use petabot::api::AppState;
use petabot::api::app;
use petabot::core::AppConfig;

/// Config with fake keys and upstream hostnames that tests can point
/// at a mock server.
pub fn test_config() -> AppConfig {
    AppConfig {
        openai_api_hostname: String::from("https://api.openai.com"),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o-mini"),
        maps_api_key: String::from("test-maps-key"),
        maps_legacy_api_url: String::from(
            "https://maps.googleapis.com/maps/api/place/textsearch/json",
        ),
        maps_v1_api_url: String::from("https://places.googleapis.com/v1/places:searchText"),
        chat_base_path: String::from("/chat"),
        rate_limit: 10,
        rate_limit_window_ms: 10_000,
    }
}

/// Creates a test application router from the given config.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
