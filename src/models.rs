use serde::{Deserialize, Serialize};

use crate::prompt_info::PromptInfo;

// POST /chat body
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub force_new: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatReply {
    pub reply: String,
}

// POST /check-cache body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CheckCacheRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckCacheResponse {
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub requested_days: u32,
    pub prompt_info: PromptInfo,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

// One turn of the conversation sent to the completion API
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
}
