pub mod health;
pub mod landing;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::chat::handlers::handle_chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(landing::landing_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze-resume",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/chat", post(handle_chat))
        .with_state(state)
}
