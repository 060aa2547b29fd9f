use crate::LocalEvent;

use tokio::sync::broadcast;

pub const PAGE_CHANNEL_CAPACITY: usize = 64;

/// Publish/subscribe link between the components of one page load.
///
/// Created per page session and handed to each component that needs it, so
/// two pages (or two tests) never hear each other. Publishing is
/// fire-and-forget.
#[derive(Debug, Clone)]
pub struct PageChannel {
    sender: broadcast::Sender<LocalEvent>,
}

impl Default for PageChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PageChannel {
    pub fn new() -> Self {
        Self::with_capacity(PAGE_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Number of listeners that will see the event
    pub fn publish(&self, event: LocalEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                log::debug!("Page event dropped, nobody is listening");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LocalEvent> {
        self.sender.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
