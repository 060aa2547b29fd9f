//! Axum extractor for REST API authentication

use crate::ApiError;

use bm_core::User;
use bm_feed::AppState;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The authenticated caller.
///
/// Validates the `Authorization: Bearer <jwt>` header. With auth disabled
/// every request runs as the configured dev user.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let user = state.authenticate(authorization)?;
            log::debug!("Request authenticated as {}", user.id);

            Ok(CurrentUser(user))
        }
    }
}
