use crate::{ConnectionId, ConnectionLimits, FeedError, Result as FeedErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use tokio::sync::RwLock;

/// One open change-feed socket
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub user_id: String,
    pub connected_at: DateTime<Utc>,
}

#[derive(Default)]
struct Slots {
    open: HashMap<ConnectionId, ConnectionInfo>,
    per_user: HashMap<String, usize>,
}

/// Open change-feed sockets, with a cap per user (tabs, devices) and one
/// across all users. Clones share the same slots.
#[derive(Clone)]
pub struct ConnectionRegistry {
    slots: Arc<RwLock<Slots>>,
    limits: ConnectionLimits,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            slots: Arc::default(),
            limits,
        }
    }

    /// Take a slot for `user_id`, or fail when either cap is reached
    pub async fn register(&self, user_id: String) -> FeedErrorResult<ConnectionId> {
        let mut slots = self.slots.write().await;

        let total = slots.open.len();
        let mine = slots.per_user.get(&user_id).copied().unwrap_or(0);
        let full = if total >= self.limits.max_total {
            Some((total, self.limits.max_total))
        } else if mine >= self.limits.max_per_user {
            Some((mine, self.limits.max_per_user))
        } else {
            None
        };
        if let Some((current, max)) = full {
            log::warn!(
                "Rejecting feed connection for user {}: {}/{} in use",
                user_id,
                current,
                max
            );
            return Err(FeedError::ConnectionLimitExceeded {
                current,
                max,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        *slots.per_user.entry(user_id.clone()).or_default() += 1;
        slots.open.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                user_id,
                connected_at: Utc::now(),
            },
        );
        log::debug!("{} feed connections open", slots.open.len());

        Ok(connection_id)
    }

    /// Free the slot; unknown ids are ignored
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut slots = self.slots.write().await;
        let Some(info) = slots.open.remove(&connection_id) else {
            return;
        };

        if let Some(count) = slots.per_user.get_mut(&info.user_id) {
            *count -= 1;
            if *count == 0 {
                slots.per_user.remove(&info.user_id);
            }
        }
        log::info!(
            "Unregistered connection {connection_id} ({} remaining)",
            slots.open.len()
        );
    }

    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        self.slots.read().await.open.get(&connection_id).cloned()
    }

    pub async fn total_count(&self) -> usize {
        self.slots.read().await.open.len()
    }

    pub async fn user_count(&self, user_id: &str) -> usize {
        self.slots
            .read()
            .await
            .per_user
            .get(user_id)
            .copied()
            .unwrap_or(0)
    }
}
