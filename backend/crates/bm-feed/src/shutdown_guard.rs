use tokio::sync::watch;

/// One task's view of the [`ShutdownCoordinator`](crate::ShutdownCoordinator) flag
pub struct ShutdownGuard {
    flag: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(flag: watch::Receiver<bool>) -> Self {
        Self { flag }
    }

    /// Resolves once shutdown is requested, right away if it already was.
    /// Also resolves if every coordinator is gone.
    pub async fn wait(&mut self) {
        let _ = self.flag.wait_for(|stopping| *stopping).await;
    }

    pub fn poll_shutdown(&self) -> bool {
        *self.flag.borrow()
    }
}
