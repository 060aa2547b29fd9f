pub mod bookmark;
pub mod change_event;
pub mod change_filter;
pub mod change_kind;
pub mod user;
