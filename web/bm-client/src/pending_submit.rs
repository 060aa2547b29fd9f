use bm_core::NewBookmark;

/// A submission announced on the page channel and awaiting the store.
///
/// Returned by [`BookmarkForm::begin`](crate::BookmarkForm::begin) and
/// handed back to [`BookmarkForm::finish`](crate::BookmarkForm::finish).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub(crate) provisional_id: String,
    pub(crate) request: NewBookmark,
}

impl PendingSubmit {
    pub fn provisional_id(&self) -> &str {
        &self.provisional_id
    }

    /// What to send to the store
    pub fn request(&self) -> &NewBookmark {
        &self.request
    }
}
