use crate::{AuthError, Result as AuthErrorResult};

use bm_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LEN: usize = 128;

/// Session token payload. `sub` is the user id bookmarks are stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: String,
    /// Unix seconds
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Checks the signature cannot vouch for
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        let problem = if self.sub.trim().is_empty() {
            "sub (user id) cannot be empty"
        } else if self.sub.len() > MAX_SUBJECT_LEN {
            "sub (user id) is too long"
        } else {
            return Ok(());
        };

        Err(AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: problem.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn into_user(self) -> User {
        User::new(self.sub, self.email)
    }
}
