/// Where a displayed record stands relative to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    /// Shown optimistically; the insert request has not answered yet
    Pending,
    Confirmed,
    /// The store rejected the insert. Kept on screen, not retried.
    Failed,
}

impl RecordStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
