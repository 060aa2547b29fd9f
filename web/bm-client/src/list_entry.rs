use crate::RecordStatus;

use bm_core::Bookmark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub bookmark: Bookmark,
    pub status: RecordStatus,
}

impl ListEntry {
    pub fn confirmed(bookmark: Bookmark) -> Self {
        Self {
            bookmark,
            status: RecordStatus::Confirmed,
        }
    }

    pub fn pending(bookmark: Bookmark) -> Self {
        Self {
            bookmark,
            status: RecordStatus::Pending,
        }
    }

    pub fn id(&self) -> &str {
        &self.bookmark.id
    }
}
