use std::sync::Arc;

use crate::config::Config;
use crate::gemini::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup; no state is shared between
/// requests beyond these handles.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-generation backend. Production: `GeminiClient`.
    /// Tests swap in a recording mock.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
