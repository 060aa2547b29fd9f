
use crate::{BookmarkService, BookmarkValidator, BroadcastConfig, Metrics, UserBroadcaster};

use bm_db::{BookmarkRepository, Database};

pub(crate) async fn create_test_service() -> BookmarkService {
    let pool = Database::open_in_memory().await.unwrap();
    BookmarkService::new(
        BookmarkRepository::new(pool),
        UserBroadcaster::new(BroadcastConfig::default()),
        BookmarkValidator::default(),
        Metrics::default(),
    )
}
