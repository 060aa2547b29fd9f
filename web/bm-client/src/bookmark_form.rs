use crate::{
    ClientError, IdPolicy, LocalEvent, Notifier, PageChannel, PendingSubmit,
    Result as ClientResult,
};

use bm_core::{Bookmark, DataStore, NewBookmark, Result as CoreResult};

use std::sync::Arc;

/// Submission form: title and URL inputs plus the optimistic insert flow.
pub struct BookmarkForm {
    user_id: String,
    store: Arc<dyn DataStore>,
    channel: PageChannel,
    notifier: Arc<dyn Notifier>,
    id_policy: IdPolicy,
    title: String,
    url: String,
    loading: bool,
}

impl BookmarkForm {
    pub fn new(
        user_id: impl Into<String>,
        store: Arc<dyn DataStore>,
        channel: PageChannel,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            store,
            channel,
            notifier,
            id_policy: IdPolicy::default(),
            title: String::new(),
            url: String::new(),
            loading: false,
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Announce a provisional record, then ask the store to persist it.
    ///
    /// Empty inputs are rejected up front and left as typed. Otherwise the
    /// inputs are cleared whatever the store answers; a store failure is
    /// alerted and announced as `LocalEvent::Failed`, the provisional
    /// record is not withdrawn and nothing is retried.
    pub async fn submit(&mut self) -> ClientResult<Bookmark> {
        let pending = self.begin()?;
        let result = self.store.insert(pending.request.clone()).await;
        self.finish(pending, result)
    }

    /// First half of [`submit`](Self::submit): validate, publish
    /// `LocalEvent::Added` and enter the loading state. The caller sends
    /// [`PendingSubmit::request`] to the store and passes the answer to
    /// [`finish`](Self::finish).
    pub fn begin(&mut self) -> ClientResult<PendingSubmit> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClientError::required("title"));
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ClientError::required("url"));
        }

        let provisional = Bookmark::provisional(&self.user_id, title.to_string(), url.to_string());
        let provisional_id = provisional.id.clone();

        let mut request = NewBookmark::new(
            &self.user_id,
            provisional.title.clone(),
            provisional.url.clone(),
        );
        if self.id_policy == IdPolicy::PassThrough {
            request = request.with_id(provisional_id.clone());
        }

        self.loading = true;
        self.channel.publish(LocalEvent::Added(provisional));
        log::debug!("Submitting provisional bookmark {}", provisional_id);

        Ok(PendingSubmit {
            provisional_id,
            request,
        })
    }

    /// Second half of [`submit`](Self::submit): clear the inputs, leave the
    /// loading state and announce the store's answer.
    pub fn finish(
        &mut self,
        pending: PendingSubmit,
        result: CoreResult<Bookmark>,
    ) -> ClientResult<Bookmark> {
        let PendingSubmit { provisional_id, .. } = pending;

        self.title.clear();
        self.url.clear();
        self.loading = false;

        match result {
            Ok(bookmark) => {
                self.channel.publish(LocalEvent::Confirmed {
                    provisional_id,
                    bookmark: bookmark.clone(),
                });
                Ok(bookmark)
            }
            Err(e) => {
                let message = e.user_message();
                log::warn!("Insert of {} failed: {}", provisional_id, e);
                self.notifier.alert(&message);
                self.channel.publish(LocalEvent::Failed {
                    provisional_id,
                    message,
                });
                Err(ClientError::store(e))
            }
        }
    }
}
