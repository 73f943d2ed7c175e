use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A saved bookmark.
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// In-memory bookmark storage shared across request handlers.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: RwLock<HashMap<Uuid, Bookmark>>,
}

impl BookmarkStore {
    pub fn insert(&self, url: String, title: String, tags: Vec<String>) -> Bookmark {
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            url,
            title,
            tags,
            created_at: Utc::now(),
        };
        self.bookmarks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(bookmark.id, bookmark.clone());
        bookmark
    }

    pub fn get(&self, id: Uuid) -> Option<Bookmark> {
        self.bookmarks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.bookmarks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// List bookmarks, optionally restricted to those carrying `tag`.
    /// Results are ordered by creation time so listings are stable.
    pub fn list(&self, tag: Option<&str>) -> Vec<Bookmark> {
        let mut bookmarks: Vec<Bookmark> = self
            .bookmarks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|b| tag.is_none_or(|t| b.tags.iter().any(|have| have == t)))
            .cloned()
            .collect();
        bookmarks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        bookmarks
    }
}
