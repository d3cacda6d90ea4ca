use std::any::Any;
use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    response::{Json, Redirect},
    routing::get,
};
use http::{StatusCode, header};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;

async fn health() -> Json<serde_json::Value> {
    Json(json!({"message": "OK"}))
}

async fn handle_404() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Custom 404 Not Found"})),
    )
}

/// Render a panic anywhere in routing as the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> http::Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown error".to_string()
    };

    tracing::error!("Unhandled panic in request handler: {}", detail);

    let body = json!({"message": format!("Custom Error Message: {}", detail)}).to_string();
    http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("Failed to build panic response")
}

pub fn app(shared_state: Arc<RwLock<AppState>>) -> Router {
    let cors = CorsLayer::permissive();

    let chat_base_path = {
        let state = shared_state.read().expect("Unable to read shared state");
        state.config.chat_base_path.clone()
    };

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/health") }))
        .route("/health", get(health))
        // Chat routes, mounted under the configurable base path
        .merge(routes::chat::router(&chat_base_path))
        .fallback(handle_404)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = AppState::new(config);
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .unwrap();

    tracing::debug!(
        "Server started. Listening on {}",
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app).await.unwrap();
}
