use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, COMPLETION_ERRORS, COMPLETION_LATENCY, REQUEST_TOTAL};
use crate::models::{ChatReply, ChatRequest};
use crate::state::AppState;

#[instrument(skip_all, fields(force_new = tracing::field::Empty))]
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    REQUEST_TOTAL.with_label_values(&["chat"]).inc();

    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    if request.prompt.is_empty() {
        return Err(ApiError::missing_prompt());
    }
    tracing::Span::current().record("force_new", request.force_new);

    // the raw prompt is the cache key, never the tagged text sent upstream
    if !request.force_new {
        if let Some(reply) = state.cache.get(&request.prompt).await? {
            CACHE_HITS.inc();
            debug!("Cache HIT");
            return Ok(Json(ChatReply { reply }));
        }
        CACHE_MISSES.inc();
        debug!("Cache MISS - calling completion API");
    }

    let messages = state
        .prompt_version
        .conversation(&request.prompt, request.force_new);

    let start_time = Instant::now();
    let reply = state
        .completion
        .complete(&state.model, &messages)
        .await
        .inspect_err(|_| COMPLETION_ERRORS.inc())?;
    let elapsed = start_time.elapsed();
    COMPLETION_LATENCY.observe(elapsed.as_secs_f64());
    info!(model = %state.model, latency_ms = elapsed.as_millis() as u64, "Completion received");

    if !request.force_new {
        state
            .cache
            .set_ex(&request.prompt, &reply, state.ttl)
            .await?;
    }

    Ok(Json(ChatReply { reply }))
}
