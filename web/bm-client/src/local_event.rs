use bm_core::Bookmark;

/// Same-page notification from the submission form to the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalEvent {
    /// A provisional record to show right away
    Added(Bookmark),
    /// The store persisted the provisional record as `bookmark`
    Confirmed {
        provisional_id: String,
        bookmark: Bookmark,
    },
    /// The store rejected the provisional record; the form already alerted
    Failed {
        provisional_id: String,
        message: String,
    },
}
