use crate::{AuthError, JwtValidator};

use bm_core::{AuthProvider, CoreError, ErrorLocation, Result as CoreErrorResult, User};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Session held as a signed JWT.
///
/// The OAuth callback stores the issued token with [`set_session`]; from
/// then on the current user is whatever the token says, until it expires
/// or the session is signed out.
///
/// [`set_session`]: TokenAuthProvider::set_session
pub struct TokenAuthProvider {
    validator: Arc<JwtValidator>,
    authorize_url: String,
    token: RwLock<Option<String>>,
}

impl TokenAuthProvider {
    pub fn new(validator: Arc<JwtValidator>, authorize_url: impl Into<String>) -> Self {
        Self {
            validator,
            authorize_url: authorize_url.into(),
            token: RwLock::new(None),
        }
    }

    pub async fn set_session(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[async_trait]
impl AuthProvider for TokenAuthProvider {
    async fn current_user(&self) -> Option<User> {
        let token = self.token.read().await;
        let token = token.as_deref()?;

        match self.validator.current_user(token) {
            Ok(user) => Some(user),
            Err(e) => {
                log::debug!("Session token rejected: {}", e);
                None
            }
        }
    }

    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_target: &str,
    ) -> CoreErrorResult<String> {
        if provider.trim().is_empty() {
            return Err(AuthError::InvalidOAuthRequest {
                message: "provider cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
        if !(redirect_target.starts_with("http://") || redirect_target.starts_with("https://")) {
            return Err(AuthError::InvalidOAuthRequest {
                message: format!("redirect target must be absolute: {}", redirect_target),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let url = format!(
            "{}?provider={}&redirect_to={}",
            self.authorize_url,
            encode_query_component(provider),
            encode_query_component(redirect_target)
        );
        log::info!("Starting OAuth sign-in with provider {}", provider);

        Ok(url)
    }

    async fn sign_out(&self) -> CoreErrorResult<()> {
        let previous = self.token.write().await.take();
        if previous.is_some() {
            log::info!("Session signed out");
        }
        Ok(())
    }
}

impl From<AuthError> for CoreError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::InvalidOAuthRequest { message, .. } => CoreError::Validation {
                message,
                field: None,
                location,
            },
            other => CoreError::Unauthorized {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// Percent-encode everything outside RFC 3986 unreserved characters
fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
