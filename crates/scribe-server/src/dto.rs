use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Bookmark;

// ---------------------------------------------------------------------------
// Bookmarks (v1)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateBookmarkRequest {
    /// Address to bookmark
    pub url: String,
    /// Human-readable title
    pub title: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url,
            title: bookmark.title,
            created_at: bookmark.created_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkListResponse {
    pub bookmarks: Vec<BookmarkResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Bookmarks (v2)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateBookmarkRequestV2 {
    /// Address to bookmark
    pub url: String,
    /// Human-readable title
    pub title: String,
    /// Free-form labels used for filtering
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListBookmarksQuery {
    /// Only return bookmarks carrying this tag
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkDetailResponse {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkDetailResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url,
            title: bookmark.title,
            tags: bookmark.tags,
            created_at: bookmark.created_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkDetailListResponse {
    pub bookmarks: Vec<BookmarkDetailResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
