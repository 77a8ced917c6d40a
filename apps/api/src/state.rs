use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider behind a trait object so tests can substitute a
    /// scripted double for the Gemini client.
    pub provider: Arc<dyn CompletionProvider>,
    pub session: SessionStore,
}
