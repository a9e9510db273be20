use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompleter;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing in it is written during request handling.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient` against Groq.
    pub llm: Arc<dyn ChatCompleter>,
    pub config: Config,
}
