pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{Database, MIGRATOR};
pub use error::{DbError, Result};
pub use repositories::bookmark_repository::BookmarkRepository;
