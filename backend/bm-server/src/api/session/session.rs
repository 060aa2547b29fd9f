use crate::{ApiResult, BookmarkDto, CurrentUser, SessionResponse};

use bm_core::DataStore;
use bm_feed::AppState;

use axum::{Json, extract::State};

/// GET /api/v1/session
///
/// The current user plus the snapshot the list view is seeded from.
/// Unauthenticated callers get 401, which the page turns into a redirect
/// to the login page.
pub async fn get_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<SessionResponse>> {
    let bookmarks = state.service.select_all(&user.id).await?;

    Ok(Json(SessionResponse {
        user,
        bookmarks: bookmarks.into_iter().map(BookmarkDto::from).collect(),
    }))
}
