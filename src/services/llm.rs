use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::settings::AppConfig;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("OpenAI API key not configured")]
    MissingApiKey,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// One {role, content} entry in the outbound completion payload.
/// Entries are sent in the order the caller supplies them.
#[derive(Debug, Serialize)]
pub struct ProviderMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ProviderMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LlmClient {
    /// Fails with `MissingApiKey` before any outbound traffic when the
    /// credential is not configured.
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;

        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Single best-effort completion call: no retry, no timeout override.
    /// Returns the first choice's message content.
    pub async fn complete(
        &self,
        model: &str,
        messages: Vec<ProviderMessage>,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: model.to_string(),
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(LlmError::ApiError(error_response.error.message));
            }
            return Err(LlmError::ApiError(error_text));
        }

        let completion: CompletionResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
    }
}
