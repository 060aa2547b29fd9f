use crate::{ChangeEvent, ChangeKind};

use serde::{Deserialize, Serialize};

/// Scope of a change-feed subscription: `user_id = X` plus the event kinds
/// of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFilter {
    pub user_id: String,
    pub events: Vec<ChangeKind>,
}

impl ChangeFilter {
    /// Insert, update and delete for one user
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            events: ChangeKind::ALL.to_vec(),
        }
    }

    pub fn with_events(mut self, events: &[ChangeKind]) -> Self {
        self.events = events.to_vec();
        self
    }

    pub fn accepts(&self, kind: ChangeKind) -> bool {
        self.events.contains(&kind)
    }

    /// Event kind is wanted and, when the row travels with the event, it
    /// belongs to the filtered user.
    pub fn matches(&self, event: &ChangeEvent) -> bool {
        if !self.accepts(event.kind()) {
            return false;
        }
        match &event.new {
            Some(bookmark) => bookmark.user_id == self.user_id,
            None => true,
        }
    }
}
