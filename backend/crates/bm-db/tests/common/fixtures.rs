use bm_core::Bookmark;

use chrono::{Duration, Utc};
use uuid::Uuid;

/// Creates a test Bookmark owned by `user_id`
pub fn create_test_bookmark(user_id: &str) -> Bookmark {
    Bookmark {
        id: Uuid::new_v4().to_string(),
        title: "Test Bookmark".to_string(),
        url: "https://example.com/".to_string(),
        user_id: user_id.to_string(),
        created_at: Utc::now(),
    }
}

/// Creates a test Bookmark whose created_at lies `minutes_ago` in the past
pub fn create_test_bookmark_aged(user_id: &str, title: &str, minutes_ago: i64) -> Bookmark {
    Bookmark {
        title: title.to_string(),
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        ..create_test_bookmark(user_id)
    }
}
