use scribe_core::Docs;

use crate::store::BookmarkStore;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub store: BookmarkStore,
    /// API key required on versioned endpoints.
    pub api_key: String,
    /// Pre-assembled OpenAPI documents, one per registered version.
    pub docs: Docs,
}
