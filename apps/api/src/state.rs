use std::sync::Arc;

use crate::config::Config;
use crate::credits::CreditClient;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub credits: CreditClient,
    /// Completion backend. `LlmClient` in production.
    pub llm: Arc<dyn CompletionModel>,
    pub config: Config,
}
