use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::tweets::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `LlmClient` in production, a canned stub in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
    pub config: Config,
}
