use std::path::Path;

use utoipa::OpenApi;

use scribe_core::{ApiVersion, Docs, DocsBuilder, DocsError, OperationCatalog, OperationSpec};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookmarks API",
        version = "0.1.0",
        description = "Bookmark collection service with versioned endpoints."
    ),
    paths(
        crate::routes::list_bookmarks,
        crate::routes::create_bookmark,
        crate::routes::list_bookmarks_v2,
        crate::routes::create_bookmark_v2,
        crate::routes::get_bookmark,
        crate::routes::delete_bookmark,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateBookmarkRequest,
        crate::dto::BookmarkResponse,
        crate::dto::BookmarkListResponse,
        crate::dto::CreateBookmarkRequestV2,
        crate::dto::BookmarkDetailResponse,
        crate::dto::BookmarkDetailListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "bookmarks", description = "Bookmark management"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;

/// Declares which API versions each operation belongs to and whether it
/// requires authentication. Handlers stay free of auth annotations; the
/// catalog drives the 401/403 responses and security requirements added
/// during assembly.
fn operation_catalog() -> OperationCatalog {
    OperationCatalog::new()
        .declare(OperationSpec::new("health").version("1").version("2"))
        .declare(OperationSpec::new("list_bookmarks").version("1").secured())
        .declare(OperationSpec::new("create_bookmark").version("1").secured())
        .declare(OperationSpec::new("list_bookmarks_v2").version("2").secured())
        .declare(OperationSpec::new("create_bookmark_v2").version("2").secured())
        .declare(OperationSpec::new("get_bookmark").version("2").secured())
        .declare(OperationSpec::new("delete_bookmark").version("2").secured())
}

/// Assemble the per-version OpenAPI documents served by the application.
pub fn build_docs(base_path: Option<&str>, sources_dir: Option<&Path>) -> Result<Docs, DocsError> {
    let mut builder = DocsBuilder::new(operation_catalog())
        .version(ApiVersion::titled(
            "v1",
            "Bookmarks API",
            "Original bookmark collection endpoints.",
        ))
        .version(ApiVersion::titled(
            "v2",
            "Bookmarks API",
            "Adds tags, tag-filtered listing, and per-bookmark retrieval.",
        ));

    if let Some(base_path) = base_path {
        builder = builder.base_path(base_path);
    }
    if let Some(dir) = sources_dir {
        builder = builder.sources_dir(dir);
    }

    builder.build(ApiDoc::openapi())
}
