use crate::BroadcastConfig;

use bm_core::ChangeEvent;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

/// One bounded broadcast channel per user id.
///
/// Receivers are handed out raw; a channel is dropped once all of its
/// receivers are gone and [`UserBroadcaster::release`] or a later
/// subscribe notices.
pub struct UserBroadcaster {
    inner: Arc<RwLock<BroadcasterInner>>,
    config: BroadcastConfig,
}

struct BroadcasterInner {
    channels: HashMap<String, broadcast::Sender<ChangeEvent>>,
}

impl UserBroadcaster {
    pub fn new(config: BroadcastConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BroadcasterInner {
                channels: HashMap::new(),
            })),
            config,
        }
    }

    /// Subscribe to a user's change events
    pub async fn subscribe(&self, user_id: &str) -> broadcast::Receiver<ChangeEvent> {
        let mut inner = self.inner.write().await;
        inner.prune();

        let sender = inner.channels.entry(user_id.to_string()).or_insert_with(|| {
            let (sender, _) = broadcast::channel(self.config.channel_capacity);
            log::info!("Created change feed channel for user {}", user_id);
            sender
        });

        let receiver = sender.subscribe();

        log::debug!(
            "Subscribed to change feed of user {} ({} total subscribers)",
            user_id,
            sender.receiver_count()
        );

        receiver
    }

    /// Drop the user's channel if nobody listens anymore
    pub async fn release(&self, user_id: &str) {
        let mut inner = self.inner.write().await;

        if let Some(sender) = inner.channels.get(user_id)
            && sender.receiver_count() == 0
        {
            inner.channels.remove(user_id);
            log::info!("Removed empty change feed channel for user {}", user_id);
        }
    }

    /// Publish an event to every subscriber of `user_id`; returns how many
    /// receivers got it.
    pub async fn broadcast(&self, user_id: &str, event: ChangeEvent) -> usize {
        let inner = self.inner.read().await;

        let Some(sender) = inner.channels.get(user_id) else {
            log::debug!("No change feed channel for user {}", user_id);
            return 0;
        };

        match sender.send(event) {
            Ok(receiver_count) => {
                log::debug!(
                    "Broadcast change to user {} ({} receivers)",
                    user_id,
                    receiver_count
                );
                receiver_count
            }
            Err(_) => {
                // Channel exists but every receiver is gone
                log::debug!("Broadcast to user {} had no active receivers", user_id);
                0
            }
        }
    }

    pub async fn subscriber_count(&self, user_id: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .channels
            .get(user_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    pub async fn channel_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.channels.len()
    }
}

impl BroadcasterInner {
    fn prune(&mut self) {
        self.channels.retain(|user_id, sender| {
            let keep = sender.receiver_count() > 0;
            if !keep {
                log::debug!("Pruned idle change feed channel for user {}", user_id);
            }
            keep
        });
    }
}

impl Clone for UserBroadcaster {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
        }
    }
}
