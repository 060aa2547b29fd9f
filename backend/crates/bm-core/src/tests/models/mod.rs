mod bookmark;
mod change_event;
mod change_filter;
mod change_kind;
