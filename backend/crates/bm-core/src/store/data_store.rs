use crate::{
    Bookmark, BookmarkPatch, ChangeFilter, NewBookmark, Result as CoreErrorResult, Subscription,
};

use async_trait::async_trait;

/// Operations on the `bookmarks` relation plus its change feed.
///
/// Every write that succeeds is echoed to matching subscriptions, including
/// the ones opened by the session that issued the write.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn insert(&self, bookmark: NewBookmark) -> CoreErrorResult<Bookmark>;

    /// All bookmarks of `user_id`, newest `created_at` first
    async fn select_all(&self, user_id: &str) -> CoreErrorResult<Vec<Bookmark>>;

    async fn update(
        &self,
        user_id: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> CoreErrorResult<Bookmark>;

    async fn delete(&self, user_id: &str, id: &str) -> CoreErrorResult<()>;

    /// Open a change-feed subscription. Dropping the returned guard
    /// unsubscribes.
    async fn subscribe(&self, filter: ChangeFilter) -> CoreErrorResult<Subscription>;
}
