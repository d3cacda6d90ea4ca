use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub maps_api_key: String,
    pub maps_legacy_api_url: String,
    pub maps_v1_api_url: String,
    pub chat_base_path: String,
    pub rate_limit: u32,
    pub rate_limit_window_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("OPENAI_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").expect("Missing env var OPENAI_API_KEY");
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let maps_api_key =
            env::var("GOOGLE_MAPS_API_KEY").expect("Missing env var GOOGLE_MAPS_API_KEY");
        let maps_legacy_api_url = env::var("MAPS_LEGACY_API_URL").unwrap_or_else(|_| {
            "https://maps.googleapis.com/maps/api/place/textsearch/json".to_string()
        });
        let maps_v1_api_url = env::var("MAPS_V1_API_URL")
            .unwrap_or_else(|_| "https://places.googleapis.com/v1/places:searchText".to_string());
        let chat_base_path = env::var("CHAT_BASE_PATH").unwrap_or_else(|_| "/chat".to_string());
        let rate_limit = env::var("RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let rate_limit_window_ms = env::var("RATE_LIMIT_WINDOW_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            maps_api_key,
            maps_legacy_api_url,
            maps_v1_api_url,
            chat_base_path,
            rate_limit,
            rate_limit_window_ms,
        }
    }
}
