use std::sync::Arc;
use std::time::Duration;

use crate::cache::ReplyCache;
use crate::completion::CompletionClient;
use crate::prompt::PromptVersion;

// app's shared state, collaborators are injected at startup
pub struct AppState {
    pub cache: Arc<dyn ReplyCache>,
    pub completion: Arc<dyn CompletionClient>,
    pub model: String,
    pub prompt_version: PromptVersion,
    pub ttl: Duration, // how long cached replies stay valid
}

impl AppState {
    pub fn new(
        cache: Arc<dyn ReplyCache>,
        completion: Arc<dyn CompletionClient>,
        model: impl Into<String>,
        prompt_version: PromptVersion,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            completion,
            model: model.into(),
            prompt_version,
            ttl,
        }
    }
}
