use crate::{ListEntry, RecordStatus};

use bm_core::{Bookmark, ChangeEvent, ChangeKind};

/// The displayed bookmark collection, newest first.
///
/// Pure state: every input (feed delta, local optimistic insert, store
/// outcome) is applied through one of the methods below by the single task
/// that owns the list. Methods return whether the list changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    entries: Vec<ListEntry>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a store snapshot (already ordered newest first).
    pub fn from_snapshot(snapshot: Vec<Bookmark>) -> Self {
        Self {
            entries: snapshot.into_iter().map(ListEntry::confirmed).collect(),
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(ListEntry::id).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&ListEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Feed insert. A known id is ignored, except that an optimistic entry
    /// with that id takes the persisted content and becomes confirmed.
    pub fn apply_remote_insert(&mut self, bookmark: Bookmark) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == bookmark.id) {
            Some(entry) if entry.status.is_pending() => {
                entry.bookmark = bookmark;
                entry.status = RecordStatus::Confirmed;
                true
            }
            Some(_) => false,
            None => {
                self.entries.insert(0, ListEntry::confirmed(bookmark));
                true
            }
        }
    }

    /// Feed update: content replaced in place, position kept.
    pub fn apply_remote_update(&mut self, bookmark: Bookmark) -> bool {
        let mut changed = false;
        for entry in self.entries.iter_mut().filter(|e| e.id() == bookmark.id) {
            entry.bookmark = bookmark.clone();
            changed = true;
        }
        changed
    }

    pub fn apply_remote_delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    /// Dispatch one feed event to the matching operation
    pub fn apply_change(&mut self, event: ChangeEvent) -> bool {
        match (event.event_type, event.new, event.old) {
            (ChangeKind::Insert, Some(bookmark), _) => self.apply_remote_insert(bookmark),
            (ChangeKind::Update, Some(bookmark), _) => self.apply_remote_update(bookmark),
            (ChangeKind::Delete, _, Some(old)) => self.apply_remote_delete(&old.id),
            (kind, _, _) => {
                log::warn!("Ignoring {} event without a record", kind);
                false
            }
        }
    }

    /// Optimistic insert: prepended as pending, no duplicate check.
    pub fn apply_local_insert(&mut self, bookmark: Bookmark) {
        self.entries.insert(0, ListEntry::pending(bookmark));
    }

    /// Optimistic delete; the store request is made separately.
    pub fn remove(&mut self, id: &str) -> Option<ListEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// The store accepted the insert of `provisional_id`.
    ///
    /// When the store kept the id the persisted row replaces the provisional
    /// content. When it assigned a new id only the status changes; the feed
    /// echo for the new id will then be a separate entry. An entry the feed
    /// already confirmed is left alone, it may carry newer content.
    pub fn mark_confirmed(&mut self, provisional_id: &str, persisted: &Bookmark) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.id() == provisional_id && e.status.is_pending())
        else {
            return false;
        };

        if persisted.id == provisional_id {
            entry.bookmark = persisted.clone();
        }
        entry.status = RecordStatus::Confirmed;
        true
    }

    /// The store rejected the insert; the entry stays visible.
    pub fn mark_failed(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) if entry.status.is_pending() => {
                entry.status = RecordStatus::Failed;
                true
            }
            _ => false,
        }
    }
}
