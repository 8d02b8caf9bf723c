use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::config::settings::DEFAULT_MODEL;
use crate::modules::chat::schema::{ChatRequest, ChatResponse, MessageResponse, PoemRequest};
use crate::services::llm::{LlmClient, LlmError, ProviderMessage};
use crate::AppState;

fn llm_unavailable(endpoint: &str, e: LlmError) -> (StatusCode, Json<MessageResponse>) {
    tracing::error!("Error in {} endpoint: {}", endpoint, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse { message: e.to_string() }),
    )
}

fn upstream_error(endpoint: &str, e: LlmError) -> (StatusCode, Json<MessageResponse>) {
    tracing::error!("Error in {} endpoint: {}", endpoint, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse { message: format!("AI service error: {}", e) }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let llm = LlmClient::new(&state.config).map_err(|e| llm_unavailable("chat", e))?;

    // Conversation order carries through as-is.
    let messages = payload
        .messages
        .iter()
        .map(|m| ProviderMessage {
            role: m.role.to_string(),
            content: m.content.clone(),
        })
        .collect();

    let content = llm
        .complete(&payload.model, messages)
        .await
        .map_err(|e| upstream_error("chat", e))?;

    Ok(Json(ChatResponse {
        message: content,
        model_used: payload.model,
    }))
}

pub async fn generate_poem(
    State(state): State<AppState>,
    Json(payload): Json<PoemRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<MessageResponse>)> {
    let llm = LlmClient::new(&state.config).map_err(|e| llm_unavailable("generate-poem", e))?;

    let messages = vec![ProviderMessage {
        role: "user".to_string(),
        content: format!(
            "Write a beautiful short poem about {}. Make it inspiring and creative.",
            payload.theme
        ),
    }];

    // Poems always use the default model, whatever the client asked for.
    let content = llm
        .complete(DEFAULT_MODEL, messages)
        .await
        .map_err(|e| upstream_error("generate-poem", e))?;

    Ok(Json(ChatResponse {
        message: content,
        model_used: DEFAULT_MODEL.to_string(),
    }))
}
