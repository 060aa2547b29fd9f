use crate::{Result as CoreErrorResult, User};

use async_trait::async_trait;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, or `None` when there is no valid session
    async fn current_user(&self) -> Option<User>;

    /// Start an OAuth sign-in. Returns the URL the browser must be sent to;
    /// the provider redirects back to `redirect_target` afterwards.
    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_target: &str,
    ) -> CoreErrorResult<String>;

    async fn sign_out(&self) -> CoreErrorResult<()>;
}
