use crate::{BookmarkValidator, FeedError, Metrics, Result as FeedErrorResult, UserBroadcaster};

use bm_core::{
    Bookmark, BookmarkPatch, ChangeEvent, ChangeFilter, DataStore, NewBookmark,
    Result as CoreErrorResult, Subscription,
};
use bm_db::BookmarkRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Server-side data store: validates writes, persists them and echoes each
/// committed change to the owner's feed channel.
#[derive(Clone)]
pub struct BookmarkService {
    repo: BookmarkRepository,
    broadcaster: UserBroadcaster,
    validator: BookmarkValidator,
    metrics: Metrics,
}

impl BookmarkService {
    pub fn new(
        repo: BookmarkRepository,
        broadcaster: UserBroadcaster,
        validator: BookmarkValidator,
        metrics: Metrics,
    ) -> Self {
        Self {
            repo,
            broadcaster,
            validator,
            metrics,
        }
    }

    pub fn broadcaster(&self) -> &UserBroadcaster {
        &self.broadcaster
    }

    pub async fn ping(&self) -> FeedErrorResult<()> {
        Ok(self.repo.ping().await?)
    }

    pub async fn create_bookmark(&self, new: NewBookmark) -> FeedErrorResult<Bookmark> {
        let title = self.validator.title(&new.title)?;
        let url = self.validator.url(&new.url)?;
        let id = match &new.id {
            Some(id) => self.validator.client_id(id)?,
            None => Uuid::new_v4().to_string(),
        };

        let bookmark = Bookmark {
            id,
            title,
            url,
            user_id: new.user_id,
            created_at: now_millis(),
        };

        self.repo.create(&bookmark).await?;
        log::info!(
            "Created bookmark {} for user {}",
            bookmark.id,
            bookmark.user_id
        );

        self.publish(&bookmark.user_id, ChangeEvent::insert(bookmark.clone()))
            .await;

        Ok(bookmark)
    }

    pub async fn list_bookmarks(&self, user_id: &str) -> FeedErrorResult<Vec<Bookmark>> {
        Ok(self.repo.find_by_user(user_id).await?)
    }

    pub async fn update_bookmark(
        &self,
        user_id: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> FeedErrorResult<Bookmark> {
        if patch.is_empty() {
            return Err(FeedError::validation(
                "update must change title or url",
                "body",
            ));
        }

        let patch = BookmarkPatch {
            title: patch.title.as_deref().map(|t| self.validator.title(t)).transpose()?,
            url: patch.url.as_deref().map(|u| self.validator.url(u)).transpose()?,
        };

        let mut bookmark = self
            .repo
            .find_owned(user_id, id)
            .await?
            .ok_or_else(|| FeedError::not_found(format!("Bookmark {} not found", id)))?;

        patch.apply(&mut bookmark);

        if !self.repo.update(&bookmark).await? {
            // Deleted between read and write
            return Err(FeedError::not_found(format!("Bookmark {} not found", id)));
        }
        log::info!("Updated bookmark {} for user {}", id, user_id);

        self.publish(user_id, ChangeEvent::update(bookmark.clone()))
            .await;

        Ok(bookmark)
    }

    pub async fn delete_bookmark(&self, user_id: &str, id: &str) -> FeedErrorResult<()> {
        if !self.repo.delete(user_id, id).await? {
            return Err(FeedError::not_found(format!("Bookmark {} not found", id)));
        }
        log::info!("Deleted bookmark {} for user {}", id, user_id);

        self.publish(user_id, ChangeEvent::delete(id)).await;

        Ok(())
    }

    pub async fn open_subscription(&self, filter: ChangeFilter) -> FeedErrorResult<Subscription> {
        if filter.user_id.trim().is_empty() {
            return Err(FeedError::validation(
                "subscription filter needs a user id",
                "user_id",
            ));
        }

        let receiver = self.broadcaster.subscribe(&filter.user_id).await;
        self.metrics.subscription_opened();

        Ok(Subscription::new(filter, receiver))
    }

    async fn publish(&self, user_id: &str, event: ChangeEvent) {
        let kind = event.kind();
        let receivers = self.broadcaster.broadcast(user_id, event).await;
        self.metrics.broadcast_published(kind.as_str(), receivers);
    }
}

/// Stored timestamps have millisecond precision; hand out the same value
/// the row will read back as.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

#[async_trait]
impl DataStore for BookmarkService {
    async fn insert(&self, bookmark: NewBookmark) -> CoreErrorResult<Bookmark> {
        Ok(self.create_bookmark(bookmark).await?)
    }

    async fn select_all(&self, user_id: &str) -> CoreErrorResult<Vec<Bookmark>> {
        Ok(self.list_bookmarks(user_id).await?)
    }

    async fn update(
        &self,
        user_id: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> CoreErrorResult<Bookmark> {
        Ok(self.update_bookmark(user_id, id, patch).await?)
    }

    async fn delete(&self, user_id: &str, id: &str) -> CoreErrorResult<()> {
        Ok(self.delete_bookmark(user_id, id).await?)
    }

    async fn subscribe(&self, filter: ChangeFilter) -> CoreErrorResult<Subscription> {
        Ok(self.open_subscription(filter).await?)
    }
}
