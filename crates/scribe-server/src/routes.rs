use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use uuid::Uuid;

use scribe_core::ui;

use crate::auth::require_api_key;
use crate::dto::{
    BookmarkDetailListResponse, BookmarkDetailResponse, BookmarkListResponse, BookmarkResponse,
    CreateBookmarkRequest, CreateBookmarkRequestV2, HealthResponse, ListBookmarksQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/v1/bookmarks", get(list_bookmarks))
        .route("/v1/bookmarks", post(create_bookmark))
        .route("/v2/bookmarks", get(list_bookmarks_v2))
        .route("/v2/bookmarks", post(create_bookmark_v2))
        .route("/v2/bookmarks/{id}", get(get_bookmark))
        .route("/v2/bookmarks/{id}", delete(delete_bookmark))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let public = Router::new()
        .route("/health", get(health))
        .merge(ui::swagger_ui(&state.docs));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Bookmarks (v1)
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/bookmarks",
    responses(
        (status = 200, description = "List of bookmarks", body = BookmarkListResponse),
    ),
    tag = "bookmarks"
)]
pub async fn list_bookmarks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let bookmarks = state.store.list(None);
    let total = bookmarks.len();

    let response = BookmarkListResponse {
        bookmarks: bookmarks.into_iter().map(BookmarkResponse::from).collect(),
        total,
    };

    axum::Json(response)
}

#[utoipa::path(
    post,
    path = "/v1/bookmarks",
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created", body = BookmarkResponse),
    ),
    tag = "bookmarks"
)]
pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<CreateBookmarkRequest>,
) -> impl IntoResponse {
    let bookmark = state.store.insert(body.url, body.title, Vec::new());

    (
        StatusCode::CREATED,
        axum::Json(BookmarkResponse::from(bookmark)),
    )
}

// ---------------------------------------------------------------------------
// Bookmarks (v2)
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v2/bookmarks",
    params(ListBookmarksQuery),
    responses(
        (status = 200, description = "List of bookmarks", body = BookmarkDetailListResponse),
    ),
    tag = "bookmarks"
)]
pub async fn list_bookmarks_v2(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookmarksQuery>,
) -> impl IntoResponse {
    let bookmarks = state.store.list(query.tag.as_deref());
    let total = bookmarks.len();

    let response = BookmarkDetailListResponse {
        bookmarks: bookmarks
            .into_iter()
            .map(BookmarkDetailResponse::from)
            .collect(),
        total,
    };

    axum::Json(response)
}

#[utoipa::path(
    post,
    path = "/v2/bookmarks",
    request_body = CreateBookmarkRequestV2,
    responses(
        (status = 201, description = "Bookmark created", body = BookmarkDetailResponse),
    ),
    tag = "bookmarks"
)]
pub async fn create_bookmark_v2(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<CreateBookmarkRequestV2>,
) -> impl IntoResponse {
    let bookmark = state
        .store
        .insert(body.url, body.title, body.tags.unwrap_or_default());

    (
        StatusCode::CREATED,
        axum::Json(BookmarkDetailResponse::from(bookmark)),
    )
}

#[utoipa::path(
    get,
    path = "/v2/bookmarks/{id}",
    params(
        ("id" = Uuid, Path, description = "Bookmark ID")
    ),
    responses(
        (status = 200, description = "Bookmark details", body = BookmarkDetailResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "bookmarks"
)]
pub async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmark = state
        .store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("bookmark {id}")))?;

    Ok(axum::Json(BookmarkDetailResponse::from(bookmark)))
}

#[utoipa::path(
    delete,
    path = "/v2/bookmarks/{id}",
    params(
        ("id" = Uuid, Path, description = "Bookmark ID")
    ),
    responses(
        (status = 204, description = "Bookmark deleted"),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "bookmarks"
)]
pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if state.store.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("bookmark {id}")))
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
