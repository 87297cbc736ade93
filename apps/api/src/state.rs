use std::sync::Arc;

use crate::assist::classifier::DomainClassifier;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no Anthropic key is configured; LLM routes then answer 503.
    pub llm: Option<LlmClient>,
    pub config: Config,
    /// Pluggable domain classifier. LLM-backed when a key is configured.
    pub classifier: Arc<dyn DomainClassifier>,
}
