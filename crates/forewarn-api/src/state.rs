use std::sync::Arc;

use forewarn_bedrock::NarrativeGenerator;
use forewarn_store::DiagnosisStore;

/// Shared application state, injected into all route handlers via Axum state.
/// Both collaborators sit behind traits so tests can swap in an in-memory
/// store and a scripted generator.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DiagnosisStore>,
    pub generator: Arc<dyn NarrativeGenerator>,
}
