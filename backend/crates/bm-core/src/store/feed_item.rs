use crate::ChangeEvent;

/// One delivery from a [`Subscription`](crate::Subscription)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    Change(ChangeEvent),
    /// The receiver fell behind and `missed` events were dropped. Local
    /// state may be stale; re-read the snapshot to recover.
    Lagged { missed: u64 },
}
