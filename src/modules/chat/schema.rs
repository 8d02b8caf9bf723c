use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::settings::DEFAULT_MODEL;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Messages cannot be empty"))]
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct PoemRequest {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "coding and AI".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub model_used: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
