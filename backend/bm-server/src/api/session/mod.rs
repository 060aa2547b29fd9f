#[allow(clippy::module_inception)]
pub mod session;
pub mod session_response;
