use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Summary backend. Production: `LlmClient`. Tests swap in a fake.
    pub generator: Arc<dyn TextGenerator>,
}
