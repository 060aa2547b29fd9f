#![allow(dead_code)]

pub mod mock_auth;
pub mod mock_store;
pub mod recording_notifier;

pub use mock_auth::MockAuth;
pub use mock_store::MockStore;
pub use recording_notifier::RecordingNotifier;

use bm_client::{BookmarkListView, ViewEvent};
use bm_core::Bookmark;
use bm_db::{BookmarkRepository, Database};
use bm_feed::{BookmarkService, BookmarkValidator, BroadcastConfig, Metrics, UserBroadcaster};

use std::time::Duration;

use chrono::{DateTime, Utc};

pub const USER: &str = "user-1";

pub fn bookmark(id: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: format!("Bookmark {id}"),
        url: format!("https://example.com/{id}"),
        user_id: USER.to_string(),
        created_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap_or_default(),
    }
}

/// The real store, in process, over an in-memory database
pub async fn create_service() -> BookmarkService {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to open test database");

    BookmarkService::new(
        BookmarkRepository::new(pool),
        UserBroadcaster::new(BroadcastConfig::default()),
        BookmarkValidator::default(),
        Metrics::new(),
    )
}

/// Drive the view until `wanted` says yes, or fail after a second
pub async fn process_until(
    view: &mut BookmarkListView,
    wanted: impl Fn(&ViewEvent) -> bool,
) -> ViewEvent {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            let event = view.process_next().await;
            if wanted(&event) {
                return event;
            }
        }
    })
    .await
    .expect("timed out waiting for view event")
}
