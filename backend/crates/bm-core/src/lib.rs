pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use models::change_event::{ChangeEvent, OldRecord};
pub use models::change_filter::ChangeFilter;
pub use models::change_kind::ChangeKind;
pub use models::user::User;
pub use store::auth_provider::AuthProvider;
pub use store::data_store::DataStore;
pub use store::feed_item::FeedItem;
pub use store::subscription::Subscription;
