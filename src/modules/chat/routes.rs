use axum::{routing::post, Router};

use crate::modules::chat::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(controller::chat))
        .route("/generate-poem", post(controller::generate_poem))
}
