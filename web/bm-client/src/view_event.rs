use crate::LocalEvent;

use bm_core::ChangeEvent;

/// What the list view just applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Remote(ChangeEvent),
    Local(LocalEvent),
    DeleteConfirmed { id: String },
    /// Alerted; the entry is not restored
    DeleteFailed { id: String, message: String },
    /// The change feed dropped `missed` events; re-read the snapshot to
    /// catch up
    FeedLagged { missed: u64 },
    /// The change feed ended. The view stays up without live updates.
    FeedClosed,
    /// The page channel overflowed and dropped `missed` events
    LocalLagged { missed: u64 },
    /// Every publisher of the page channel is gone
    PageClosed,
}
