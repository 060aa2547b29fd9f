//! Bookmark REST API handlers
//!
//! Writes go through `BookmarkService`, which echoes every committed change
//! on the owner's change feed.

use crate::{
    ApiResult, BookmarkDto, BookmarkListResponse, BookmarkResponse, CreateBookmarkRequest,
    CurrentUser, DeleteResponse, UpdateBookmarkRequest,
};

use bm_core::NewBookmark;
use bm_feed::AppState;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<BookmarkListResponse>> {
    let bookmarks = state.service.list_bookmarks(&user.id).await?;

    Ok(Json(BookmarkListResponse {
        bookmarks: bookmarks.into_iter().map(BookmarkDto::from).collect(),
    }))
}

/// POST /api/v1/bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateBookmarkRequest>,
) -> ApiResult<Json<BookmarkResponse>> {
    let mut new = NewBookmark::new(&user.id, req.title, req.url);
    if let Some(id) = req.id {
        new = new.with_id(id);
    }

    let bookmark = state.service.create_bookmark(new).await?;
    log::info!("Created bookmark {} via REST API", bookmark.id);

    Ok(Json(BookmarkResponse {
        bookmark: bookmark.into(),
    }))
}

/// PUT /api/v1/bookmarks/{id}
pub async fn update_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> ApiResult<Json<BookmarkResponse>> {
    let bookmark = state
        .service
        .update_bookmark(&user.id, &id, req.into())
        .await?;
    log::info!("Updated bookmark {} via REST API", id);

    Ok(Json(BookmarkResponse {
        bookmark: bookmark.into(),
    }))
}

/// DELETE /api/v1/bookmarks/{id}
pub async fn delete_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.service.delete_bookmark(&user.id, &id).await?;
    log::info!("Deleted bookmark {} via REST API", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}
