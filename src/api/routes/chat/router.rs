//! Router for the chat API

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use http::HeaderMap;
use serde_json::json;

use super::public::ChatRequest;
use crate::api::routes::SharedState;
use crate::chat::process_chat;

// Forwarded-IP headers checked in order for the rate limit key
const CLIENT_IP_HEADERS: [&str; 2] = ["cf-connecting-ip", "x-forwarded-for"];

fn client_key(headers: &HeaderMap) -> String {
    CLIENT_IP_HEADERS
        .iter()
        .find_map(|name| headers.get(*name))
        .and_then(|value| value.to_str().ok())
        .unwrap_or("local")
        .to_string()
}

/// Liveness probe for the chat route group
async fn chat_liveness() -> Json<serde_json::Value> {
    Json(json!({"message": "OK"}))
}

/// Handle a single chat message: rate limit, validate, then run the
/// intent extraction and place search pipeline.
async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, crate::api::public::ApiError> {
    let key = client_key(&headers);

    let (limited, config, places) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.limiter.check_and_record(&key),
            shared_state.config.clone(),
            shared_state.places.clone(),
        )
    };

    if limited {
        return Ok((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too Many Requests"})),
        )
            .into_response());
    }

    // A body that isn't valid JSON degrades to an empty request
    // rather than a parse error
    let request: ChatRequest = serde_json::from_str(&body).unwrap_or_default();
    let message = request.message.trim();
    if message.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "message is required"})),
        )
            .into_response());
    }

    let payload = process_chat(&config, &places, message).await?;
    Ok(Json(payload).into_response())
}

/// Create the chat router mounted at `base_path`. Axum treats the
/// bare path and the trailing-slash form as distinct routes, so both
/// are registered against the same handlers.
pub fn router(base_path: &str) -> Router<SharedState> {
    let base = base_path.trim_end_matches('/');
    let handlers = get(chat_liveness).post(chat_handler);
    Router::new()
        .route(base, handlers.clone())
        .route(&format!("{base}/"), handlers)
}
