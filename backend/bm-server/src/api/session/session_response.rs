use crate::BookmarkDto;

use bm_core::User;

use serde::Serialize;

/// Everything the home page needs on load
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub bookmarks: Vec<BookmarkDto>,
}
