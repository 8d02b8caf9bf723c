use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Reports whether the provider credential is present, never its value.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
}
