use crate::{
    BookmarkList, ClientError, ListEntry, LocalEvent, Notifier, PageChannel,
    Result as ClientResult, ViewEvent,
};

use bm_core::{Bookmark, ChangeFilter, CoreError, DataStore, FeedItem, Subscription};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use tokio::sync::{
    broadcast::{self, error::RecvError, error::TryRecvError},
    mpsc,
};

/// Result of a detached delete request
#[derive(Debug)]
struct DeleteOutcome {
    id: String,
    result: Result<(), CoreError>,
}

/// One input for the list, whichever source it came from
enum Input {
    Feed(Option<FeedItem>),
    Local(Result<LocalEvent, RecvError>),
    Delete(DeleteOutcome),
}

/// Display and reconciliation component.
///
/// Owns the list, the change-feed subscription for the current user and
/// the page-channel listener. Inputs are applied one at a time by whoever
/// drives [`process_next`](Self::process_next) or [`pump`](Self::pump);
/// nothing else touches the list.
pub struct BookmarkListView {
    list: BookmarkList,
    store: Arc<dyn DataStore>,
    notifier: Arc<dyn Notifier>,
    user_id: Option<String>,
    subscription: Option<Subscription>,
    local: Option<broadcast::Receiver<LocalEvent>>,
    outcome_tx: mpsc::UnboundedSender<DeleteOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<DeleteOutcome>,
}

impl BookmarkListView {
    pub fn new(
        snapshot: Vec<Bookmark>,
        store: Arc<dyn DataStore>,
        channel: &PageChannel,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            list: BookmarkList::from_snapshot(snapshot),
            store,
            notifier,
            user_id: None,
            subscription: None,
            local: Some(channel.subscribe()),
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn list(&self) -> &BookmarkList {
        &self.list
    }

    pub fn entries(&self) -> &[ListEntry] {
        self.list.entries()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.list.ids()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Open the change-feed subscription for `user_id` (insert, update and
    /// delete). Any previous subscription is released first.
    pub async fn mount(&mut self, user_id: &str) -> ClientResult<()> {
        self.unmount();

        let subscription = self
            .store
            .subscribe(ChangeFilter::for_user(user_id))
            .await
            .map_err(ClientError::store)?;

        log::info!("Bookmark list mounted for user {}", user_id);
        self.subscription = Some(subscription);
        self.user_id = Some(user_id.to_string());

        Ok(())
    }

    /// Release the subscription, if any
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::info!(
                "Bookmark list unmounted for user {}",
                self.user_id.as_deref().unwrap_or("?")
            );
        }
    }

    /// Follow a change of signed-in user. Same user and still subscribed
    /// is a no-op.
    pub async fn set_user(&mut self, user_id: &str) -> ClientResult<()> {
        if self.user_id.as_deref() == Some(user_id) && self.subscription.is_some() {
            return Ok(());
        }
        self.mount(user_id).await
    }

    /// Remove `id` right away and ask the store to delete it in the
    /// background. The request is not cancelled by unmounting; a failure is
    /// alerted when its outcome is processed and the entry stays removed.
    pub fn delete(&mut self, id: &str) -> ClientResult<()> {
        let Some(user_id) = self.user_id.clone() else {
            return Err(ClientError::NotMounted {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        self.list.remove(id);

        let store = Arc::clone(&self.store);
        let outcome_tx = self.outcome_tx.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            let result = store.delete(&user_id, &id).await;
            // The view may be gone by now
            let _ = outcome_tx.send(DeleteOutcome { id, result });
        });

        Ok(())
    }

    /// Wait for the next input and apply it.
    ///
    /// Page-channel events win over feed events that are ready at the same
    /// time: the optimistic insert is always announced before the store
    /// call whose echo it must absorb.
    pub async fn process_next(&mut self) -> ViewEvent {
        let input = tokio::select! {
            biased;
            local = next_local(&mut self.local) => Input::Local(local),
            event = next_feed(&mut self.subscription) => Input::Feed(event),
            Some(outcome) = self.outcome_rx.recv() => Input::Delete(outcome),
        };

        self.apply(input)
    }

    /// Apply everything already queued without waiting; returns what was
    /// applied, in order.
    pub fn pump(&mut self) -> Vec<ViewEvent> {
        let mut applied = Vec::new();
        while let Some(input) = self.try_next() {
            applied.push(self.apply(input));
        }
        applied
    }

    fn try_next(&mut self) -> Option<Input> {
        if let Some(local) = self.local.as_mut() {
            match local.try_recv() {
                Ok(event) => return Some(Input::Local(Ok(event))),
                Err(TryRecvError::Lagged(missed)) => {
                    return Some(Input::Local(Err(RecvError::Lagged(missed))));
                }
                Err(TryRecvError::Closed) => return Some(Input::Local(Err(RecvError::Closed))),
                Err(TryRecvError::Empty) => {}
            }
        }

        if let Some(subscription) = self.subscription.as_mut() {
            match subscription.try_next_item() {
                Ok(Some(item)) => return Some(Input::Feed(Some(item))),
                Ok(None) => {}
                Err(_) => return Some(Input::Feed(None)),
            }
        }

        self.outcome_rx.try_recv().ok().map(Input::Delete)
    }

    fn apply(&mut self, input: Input) -> ViewEvent {
        match input {
            Input::Feed(Some(FeedItem::Change(event))) => {
                log::debug!(
                    "Feed {} for {}",
                    event.kind(),
                    event.record_id().unwrap_or("?")
                );
                self.list.apply_change(event.clone());
                ViewEvent::Remote(event)
            }
            Input::Feed(Some(FeedItem::Lagged { missed })) => {
                // Entries may be stale; the embedding page decides whether to reload
                ViewEvent::FeedLagged { missed }
            }
            Input::Feed(None) => {
                log::warn!("Change feed closed; live updates stopped");
                self.subscription = None;
                ViewEvent::FeedClosed
            }
            Input::Local(Ok(event)) => {
                match &event {
                    LocalEvent::Added(bookmark) => self.list.apply_local_insert(bookmark.clone()),
                    LocalEvent::Confirmed {
                        provisional_id,
                        bookmark,
                    } => {
                        self.list.mark_confirmed(provisional_id, bookmark);
                    }
                    LocalEvent::Failed { provisional_id, .. } => {
                        self.list.mark_failed(provisional_id);
                    }
                }
                ViewEvent::Local(event)
            }
            Input::Local(Err(RecvError::Lagged(missed))) => {
                log::warn!("Page channel lagged, missed {} events", missed);
                ViewEvent::LocalLagged { missed }
            }
            Input::Local(Err(RecvError::Closed)) => {
                // Keep serving the feed
                self.local = None;
                ViewEvent::PageClosed
            }
            Input::Delete(DeleteOutcome { id, result: Ok(()) }) => {
                ViewEvent::DeleteConfirmed { id }
            }
            Input::Delete(DeleteOutcome {
                id,
                result: Err(e),
            }) => {
                let message = e.user_message();
                log::warn!("Delete of {} failed: {}", id, e);
                self.notifier.alert(&message);
                ViewEvent::DeleteFailed { id, message }
            }
        }
    }
}

async fn next_local(
    local: &mut Option<broadcast::Receiver<LocalEvent>>,
) -> Result<LocalEvent, RecvError> {
    match local {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

async fn next_feed(subscription: &mut Option<Subscription>) -> Option<FeedItem> {
    match subscription {
        Some(subscription) => subscription.next_item().await,
        None => std::future::pending().await,
    }
}
