use crate::{Bookmark, ChangeKind};

use serde::{Deserialize, Serialize};

/// Key of a removed row. Deletes only carry the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldRecord {
    pub id: String,
}

/// One row-level change on the `bookmarks` relation.
///
/// INSERT and UPDATE carry `new`; DELETE carries `old`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    #[serde(rename = "eventType")]
    pub event_type: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<Bookmark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<OldRecord>,
}

impl ChangeEvent {
    pub fn insert(bookmark: Bookmark) -> Self {
        Self {
            event_type: ChangeKind::Insert,
            new: Some(bookmark),
            old: None,
        }
    }

    pub fn update(bookmark: Bookmark) -> Self {
        Self {
            event_type: ChangeKind::Update,
            new: Some(bookmark),
            old: None,
        }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Self {
            event_type: ChangeKind::Delete,
            new: None,
            old: Some(OldRecord { id: id.into() }),
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.event_type
    }

    /// Id of the affected row, whichever side carries it
    pub fn record_id(&self) -> Option<&str> {
        self.new
            .as_ref()
            .map(|b| b.id.as_str())
            .or_else(|| self.old.as_ref().map(|o| o.id.as_str()))
    }
}
