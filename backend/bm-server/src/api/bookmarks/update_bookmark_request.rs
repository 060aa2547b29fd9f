use bm_core::BookmarkPatch;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<UpdateBookmarkRequest> for BookmarkPatch {
    fn from(req: UpdateBookmarkRequest) -> Self {
        BookmarkPatch {
            title: req.title,
            url: req.url,
        }
    }
}
