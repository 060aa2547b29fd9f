use bm_core::Bookmark;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookmarkDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub user_id: String,
    /// RFC 3339, UTC, millisecond precision
    pub created_at: String,
}

impl From<Bookmark> for BookmarkDto {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            title: b.title,
            url: b.url,
            user_id: b.user_id,
            created_at: b.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
