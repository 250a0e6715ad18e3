use crate::advice::orchestrator::Orchestrator;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator bound to the provider selected at startup.
    pub orchestrator: Orchestrator,
    /// Present when `ANTHROPIC_API_KEY` is set; also enables the agent endpoint.
    pub llm: Option<LlmClient>,
}
