
use bm_core::Bookmark;

use chrono::{DateTime, Utc};

pub const TEST_USER: &str = "user-1";

/// Fixed timestamps keep equality checks independent of the clock
pub fn bookmark(id: &str, title: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        user_id: TEST_USER.to_string(),
        created_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap_or_default(),
    }
}
