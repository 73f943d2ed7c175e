use std::path::Path;
use std::sync::Arc;

use axum::Router;

use scribe_server::openapi;
use scribe_server::routes;
use scribe_server::state::AppState;
use scribe_server::store::BookmarkStore;

pub const TEST_API_KEY: &str = "test-secret-key";

/// Build the app router with an empty bookmark store and default docs.
pub fn setup_test_app() -> Router {
    setup_test_app_with(None, None)
}

/// Build the app router with an explicit base path and documentation-source
/// directory, the way `main` would from `SCRIBE_BASE_PATH` / `SCRIBE_DOCS_DIR`.
pub fn setup_test_app_with(base_path: Option<&str>, docs_dir: Option<&Path>) -> Router {
    let docs =
        openapi::build_docs(base_path, docs_dir).expect("Failed to assemble versioned documents");

    let state = Arc::new(AppState {
        store: BookmarkStore::default(),
        api_key: TEST_API_KEY.to_string(),
        docs,
    });

    routes::router(state)
}
