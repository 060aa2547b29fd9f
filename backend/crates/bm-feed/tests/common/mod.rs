#![allow(unused_imports)]

pub(crate) mod jwt_helper;
pub(crate) mod test_client;
pub(crate) mod test_server;

pub use jwt_helper::{create_expired_token, create_malformed_token, create_test_token};
pub use test_client::*;
pub use test_server::*;
