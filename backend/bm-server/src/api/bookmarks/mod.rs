pub mod bookmark_dto;
pub mod bookmark_list_response;
pub mod bookmark_response;
#[allow(clippy::module_inception)]
pub mod bookmarks;
pub mod create_bookmark_request;
pub mod update_bookmark_request;
