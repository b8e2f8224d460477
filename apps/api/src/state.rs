use std::sync::Arc;

use crate::backend::BlogBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence backend. Default: `HttpBackend` against
    /// `BACKEND_BASE_URL`; tests swap in an in-memory double.
    pub backend: Arc<dyn BlogBackend>,
}
