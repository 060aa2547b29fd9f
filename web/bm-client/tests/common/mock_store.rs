use bm_core::{
    Bookmark, BookmarkPatch, ChangeEvent, ChangeFilter, CoreError, DataStore, ErrorLocation,
    NewBookmark, Result as CoreErrorResult, Subscription,
};

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Notify, broadcast};

/// Scriptable store. Writes that succeed are echoed on its feed, like the
/// real one.
pub struct MockStore {
    feed: Mutex<Option<broadcast::Sender<ChangeEvent>>>,
    rows: Mutex<Vec<Bookmark>>,
    inserts: Mutex<Vec<NewBookmark>>,
    assigned_id: Option<String>,
    insert_gate: Option<Arc<Notify>>,
    delete_gate: Option<Arc<Notify>>,
    insert_error: Option<String>,
    delete_error: Option<String>,
    subscribe_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl Default for MockStore {
    fn default() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self {
            feed: Mutex::new(Some(sender)),
            rows: Mutex::new(Vec::new()),
            inserts: Mutex::new(Vec::new()),
            assigned_id: None,
            insert_gate: None,
            delete_gate: None,
            insert_error: None,
            delete_error: None,
            subscribe_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1),
        }
    }
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, rows: Vec<Bookmark>) -> Self {
        *self.rows.lock().unwrap() = rows;
        self
    }

    /// Ignore any client id and persist under `id`
    pub fn with_assigned_id(mut self, id: &str) -> Self {
        self.assigned_id = Some(id.to_string());
        self
    }

    /// Inserts block until the gate is notified
    pub fn with_insert_gate(mut self, gate: Arc<Notify>) -> Self {
        self.insert_gate = Some(gate);
        self
    }

    pub fn with_delete_gate(mut self, gate: Arc<Notify>) -> Self {
        self.delete_gate = Some(gate);
        self
    }

    pub fn failing_inserts(mut self, message: &str) -> Self {
        self.insert_error = Some(message.to_string());
        self
    }

    pub fn failing_deletes(mut self, message: &str) -> Self {
        self.delete_error = Some(message.to_string());
        self
    }

    pub fn inserts(&self) -> Vec<NewBookmark> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<Bookmark> {
        self.rows.lock().unwrap().clone()
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }

    /// Live subscriptions on the feed
    pub fn feed_receivers(&self) -> usize {
        self.feed
            .lock()
            .unwrap()
            .as_ref()
            .map_or(0, broadcast::Sender::receiver_count)
    }

    /// Push an event as if another session had written it
    pub fn emit(&self, event: ChangeEvent) {
        if let Some(sender) = self.feed.lock().unwrap().as_ref() {
            let _ = sender.send(event);
        }
    }

    pub fn close_feed(&self) {
        self.feed.lock().unwrap().take();
    }

    #[track_caller]
    fn store_error(message: &str) -> CoreError {
        CoreError::Store {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl DataStore for MockStore {
    async fn insert(&self, bookmark: NewBookmark) -> CoreErrorResult<Bookmark> {
        self.inserts.lock().unwrap().push(bookmark.clone());
        if let Some(gate) = &self.insert_gate {
            gate.notified().await;
        }
        if let Some(message) = &self.insert_error {
            return Err(Self::store_error(message));
        }

        let id = self
            .assigned_id
            .clone()
            .or(bookmark.id)
            .unwrap_or_else(|| format!("gen-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        let persisted = Bookmark {
            id,
            title: bookmark.title,
            url: bookmark.url,
            user_id: bookmark.user_id,
            created_at: Utc::now(),
        };

        self.rows.lock().unwrap().insert(0, persisted.clone());
        self.emit(ChangeEvent::insert(persisted.clone()));

        Ok(persisted)
    }

    async fn select_all(&self, user_id: &str) -> CoreErrorResult<Vec<Bookmark>> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|b| b.user_id == user_id)
            .collect())
    }

    async fn update(
        &self,
        user_id: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> CoreErrorResult<Bookmark> {
        let updated = {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|b| b.id == id && b.user_id == user_id)
                .ok_or_else(|| CoreError::NotFound {
                    message: format!("Bookmark {id} not found"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            patch.apply(row);
            row.clone()
        };

        self.emit(ChangeEvent::update(updated.clone()));
        Ok(updated)
    }

    async fn delete(&self, user_id: &str, id: &str) -> CoreErrorResult<()> {
        if let Some(gate) = &self.delete_gate {
            gate.notified().await;
        }
        if let Some(message) = &self.delete_error {
            return Err(Self::store_error(message));
        }

        self.rows
            .lock()
            .unwrap()
            .retain(|b| !(b.id == id && b.user_id == user_id));
        self.emit(ChangeEvent::delete(id));

        Ok(())
    }

    async fn subscribe(&self, filter: ChangeFilter) -> CoreErrorResult<Subscription> {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        let receiver = self
            .feed
            .lock()
            .unwrap()
            .as_ref()
            .map(broadcast::Sender::subscribe)
            .ok_or_else(|| CoreError::SubscriptionClosed {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Subscription::new(filter, receiver))
    }
}
