use crate::{AUTH_CALLBACK_PATH, ClientError, Result as ClientResult};

use bm_core::AuthProvider;

use std::sync::Arc;

/// OAuth entry point
pub struct LoginPage {
    auth: Arc<dyn AuthProvider>,
    origin: String,
}

impl LoginPage {
    /// `origin` is the site the browser is on, e.g. `https://bookmarks.example.com`
    pub fn new(auth: Arc<dyn AuthProvider>, origin: &str) -> Self {
        Self {
            auth,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn redirect_target(&self) -> String {
        format!("{}{}", self.origin, AUTH_CALLBACK_PATH)
    }

    /// Start sign-in with `provider`; returns the URL to send the browser to.
    pub async fn sign_in(&self, provider: &str) -> ClientResult<String> {
        let redirect = self.redirect_target();
        self.auth
            .sign_in_with_oauth(provider, &redirect)
            .await
            .map_err(ClientError::auth)
    }
}
