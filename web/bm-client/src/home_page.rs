use crate::{
    BookmarkForm, BookmarkListView, ClientError, IdPolicy, LOGIN_PATH, Notifier, PageChannel,
    Result as ClientResult,
};

use bm_core::{AuthProvider, DataStore, User};

use std::sync::Arc;

/// Outcome of loading the home page
pub enum PageLoad {
    /// No session; send the browser to [`LOGIN_PATH`]
    RedirectToLogin,
    Ready(Box<HomePage>),
}

/// The signed-in page: one form and one list, wired to a channel of their
/// own.
pub struct HomePage {
    pub user: User,
    pub form: BookmarkForm,
    pub list: BookmarkListView,
    channel: PageChannel,
    auth: Arc<dyn AuthProvider>,
}

impl HomePage {
    /// Resolve the user, fetch the snapshot and mount the list.
    pub async fn load(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DataStore>,
        notifier: Arc<dyn Notifier>,
        id_policy: IdPolicy,
    ) -> ClientResult<PageLoad> {
        let Some(user) = auth.current_user().await else {
            log::info!("No session, redirecting to {}", LOGIN_PATH);
            return Ok(PageLoad::RedirectToLogin);
        };

        let snapshot = store
            .select_all(&user.id)
            .await
            .map_err(ClientError::store)?;
        log::debug!(
            "Loaded {} bookmarks for user {}",
            snapshot.len(),
            user.id
        );

        let channel = PageChannel::new();
        let form = BookmarkForm::new(
            user.id.clone(),
            Arc::clone(&store),
            channel.clone(),
            Arc::clone(&notifier),
        )
        .with_id_policy(id_policy);

        let mut list = BookmarkListView::new(snapshot, store, &channel, notifier);
        list.mount(&user.id).await?;

        Ok(PageLoad::Ready(Box::new(Self {
            user,
            form,
            list,
            channel,
            auth,
        })))
    }

    pub fn channel(&self) -> &PageChannel {
        &self.channel
    }

    /// Drop the feed subscription, end the session and return where the
    /// browser goes next.
    pub async fn sign_out(mut self) -> ClientResult<&'static str> {
        self.list.unmount();
        self.auth.sign_out().await.map_err(ClientError::auth)?;
        log::info!("User {} signed out", self.user.id);
        Ok(LOGIN_PATH)
    }
}
