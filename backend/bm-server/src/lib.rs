pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    bookmarks::{
        bookmark_dto::BookmarkDto,
        bookmark_list_response::BookmarkListResponse,
        bookmark_response::BookmarkResponse,
        bookmarks::{create_bookmark, delete_bookmark, list_bookmarks, update_bookmark},
        create_bookmark_request::CreateBookmarkRequest,
        update_bookmark_request::UpdateBookmarkRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    session::{session::get_session, session_response::SessionResponse},
};

pub use crate::routes::build_router;
