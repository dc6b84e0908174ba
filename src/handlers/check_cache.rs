use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::metrics::REQUEST_TOTAL;
use crate::models::{CheckCacheRequest, CheckCacheResponse};
use crate::prompt_info::PromptInfo;
use crate::state::AppState;

// Reports whether a reply is cached without ever calling the completion API
#[instrument(skip_all)]
pub async fn check_cache_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckCacheRequest>, JsonRejection>,
) -> Result<Json<CheckCacheResponse>, ApiError> {
    REQUEST_TOTAL.with_label_values(&["check_cache"]).inc();

    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    if request.prompt.is_empty() {
        return Err(ApiError::missing_prompt());
    }

    let prompt_info = PromptInfo::extract(&request.prompt);
    let reply = state.cache.get(&request.prompt).await?;
    debug!(cached = reply.is_some(), requested_days = prompt_info.requested_days, "Cache checked");

    Ok(Json(CheckCacheResponse {
        cached: reply.is_some(),
        reply,
        requested_days: prompt_info.requested_days,
        prompt_info,
    }))
}
