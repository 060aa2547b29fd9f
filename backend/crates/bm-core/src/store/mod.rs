pub mod auth_provider;
pub mod data_store;
pub mod feed_item;
pub mod subscription;
