use crate::ShutdownGuard;

use std::sync::Arc;

use tokio::sync::watch;

/// Process-wide stop flag. Clones share the flag; any of them can raise it
/// and every [`ShutdownGuard`] sees it, including guards taken afterwards.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    flag: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
        }
    }

    /// Idempotent; only the first call logs
    pub fn shutdown(&self) {
        let already = self.flag.send_replace(true);
        if !already {
            log::info!("Shutdown requested, closing change-feed connections");
        }
    }

    pub fn is_shutdown(&self) -> bool {
        *self.flag.borrow()
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.flag.subscribe())
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
