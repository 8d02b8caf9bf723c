use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use bootcamp_api::config::settings::AppConfig;
use bootcamp_api::{modules, AppState};

const FRONTEND_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

fn cors_layer() -> CorsLayer {
    // Credentialed CORS requires explicit origin/method/header lists.
    let origins = FRONTEND_ORIGINS
        .iter()
        .map(|o| o.parse::<HeaderValue>().expect("valid frontend origin"));

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if !config.api_key_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; /chat and /generate-poem will return errors");
    }

    let state = AppState { config };

    let app = Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::chat::routes::routes())
        .layer(cors_layer())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
