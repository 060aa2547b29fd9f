pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod token_auth_provider;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use token_auth_provider::TokenAuthProvider;
