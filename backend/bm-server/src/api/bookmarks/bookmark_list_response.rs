use crate::BookmarkDto;

use serde::Serialize;

/// Newest first
#[derive(Debug, Serialize)]
pub struct BookmarkListResponse {
    pub bookmarks: Vec<BookmarkDto>,
}
