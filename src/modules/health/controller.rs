use axum::{extract::State, Json};

use crate::modules::health::schema::{HealthResponse, RootResponse};
use crate::AppState;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Agent Engineering Bootcamp API is running!".to_string(),
    })
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_configured: state.config.api_key_configured(),
    })
}
