mod chat;
mod check_cache;

use axum::{
    Json, Router,
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

pub use chat::chat_handler;
pub use check_cache::check_cache_handler;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/chat", post(chat_handler))
        .route("/check-cache", post(check_cache_handler))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn index_handler() -> Html<&'static str> {
    Html("<h2>Fitness Chatbot Backend is Running</h2>")
}

pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn metrics_handler() -> Result<String, ApiError> {
    metrics::render().map_err(ApiError::Internal)
}

// CorsLayer answers every OPTIONS request itself with 200, clients expect 204
async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut res = next.run(req).await;
    if is_options && res.status().is_success() {
        *res.status_mut() = StatusCode::NO_CONTENT;
    }
    res
}
