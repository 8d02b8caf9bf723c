use std::env;

pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process-wide configuration, loaded once at startup and handed to
/// handlers through `AppState`. The credential may be absent; the two
/// generation endpoints check for it per request and fail without it.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_counts_as_absent() {
        let config = AppConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert!(!config.api_key_configured());

        let config = AppConfig {
            api_key: Some("sk-test".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert!(config.api_key_configured());
    }
}
