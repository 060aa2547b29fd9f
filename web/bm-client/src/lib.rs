//! Client core of the bookmark app: optimistic inserts and deletes,
//! reconciled against the store's change feed.
//!
//! The store and the identity provider are reached only through the
//! `bm_core::DataStore` and `bm_core::AuthProvider` traits.

pub mod bookmark_form;
pub mod bookmark_list;
pub mod bookmark_list_view;
pub mod error;
pub mod home_page;
pub mod id_policy;
pub mod list_entry;
pub mod local_event;
pub mod login_page;
pub mod notifier;
pub mod page_channel;
pub mod pending_submit;
pub mod record_status;
pub mod view_event;

pub use bookmark_form::BookmarkForm;
pub use bookmark_list::BookmarkList;
pub use bookmark_list_view::BookmarkListView;
pub use error::{ClientError, Result};
pub use home_page::{HomePage, PageLoad};
pub use id_policy::IdPolicy;
pub use list_entry::ListEntry;
pub use local_event::LocalEvent;
pub use login_page::LoginPage;
pub use notifier::{LogNotifier, Notifier};
pub use page_channel::{PAGE_CHANNEL_CAPACITY, PageChannel};
pub use pending_submit::PendingSubmit;
pub use record_status::RecordStatus;
pub use view_event::ViewEvent;

#[cfg(test)]
mod tests;

pub const LOGIN_PATH: &str = "/login";
pub const AUTH_CALLBACK_PATH: &str = "/auth/callback";
