use crate::BookmarkDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub bookmark: BookmarkDto,
}
