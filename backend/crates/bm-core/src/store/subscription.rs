use crate::{
    ChangeEvent, ChangeFilter, CoreError, ErrorLocation, FeedItem, Result as CoreErrorResult,
};

use std::panic::Location;

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Live change-feed subscription.
///
/// Owns the receiving end of the feed; releasing it (explicitly through
/// [`Subscription::unsubscribe`] or by dropping it) detaches from the
/// channel so no listener outlives its owner.
pub struct Subscription {
    filter: ChangeFilter,
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    pub fn new(filter: ChangeFilter, receiver: broadcast::Receiver<ChangeEvent>) -> Self {
        log::debug!("Opened change-feed subscription for user {}", filter.user_id);
        Self { filter, receiver }
    }

    pub fn filter(&self) -> &ChangeFilter {
        &self.filter
    }

    pub fn user_id(&self) -> &str {
        &self.filter.user_id
    }

    /// Wait for the next matching event or lag notice. `None` once the feed
    /// is closed.
    pub async fn next_item(&mut self) -> Option<FeedItem> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(FeedItem::Change(event)),
                Ok(_) => continue,
                Err(RecvError::Lagged(missed)) => return Some(self.lagged(missed)),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next already-queued item, `Ok(None)` when nothing is queued.
    #[track_caller]
    pub fn try_next_item(&mut self) -> CoreErrorResult<Option<FeedItem>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => {
                    return Ok(Some(FeedItem::Change(event)));
                }
                Ok(_) => continue,
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Lagged(missed)) => return Ok(Some(self.lagged(missed))),
                Err(TryRecvError::Closed) => {
                    return Err(CoreError::SubscriptionClosed {
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }
    }

    /// Like [`next_item`](Self::next_item), skipping over lag.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            if let FeedItem::Change(event) = self.next_item().await? {
                return Some(event);
            }
        }
    }

    /// Like [`try_next_item`](Self::try_next_item), skipping over lag.
    #[track_caller]
    pub fn try_recv(&mut self) -> CoreErrorResult<Option<ChangeEvent>> {
        loop {
            match self.try_next_item()? {
                Some(FeedItem::Change(event)) => return Ok(Some(event)),
                Some(FeedItem::Lagged { .. }) => continue,
                None => return Ok(None),
            }
        }
    }

    fn lagged(&self, missed: u64) -> FeedItem {
        log::warn!(
            "Change feed for user {} lagged, missed {} events",
            self.filter.user_id,
            missed
        );
        FeedItem::Lagged { missed }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        log::debug!(
            "Released change-feed subscription for user {}",
            self.filter.user_id
        );
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
