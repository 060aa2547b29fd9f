#![allow(dead_code)]

use bm_auth::Claims;

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Signed HS256 token for `user_id`, valid for an hour
pub fn create_test_token(user_id: &str, jwt_secret: &[u8]) -> String {
    create_test_token_with_expiry(user_id, jwt_secret, Duration::from_secs(3600))
}

pub fn create_test_token_with_expiry(
    user_id: &str,
    jwt_secret: &[u8],
    expires_in: Duration,
) -> String {
    let now = Utc::now().timestamp();
    sign(user_id, now, now + expires_in.as_secs() as i64, jwt_secret)
}

/// Expired an hour ago, well past the validator's leeway
pub fn create_expired_token(user_id: &str, jwt_secret: &[u8]) -> String {
    let an_hour_ago = Utc::now().timestamp() - 3600;
    sign(user_id, an_hour_ago - 3600, an_hour_ago, jwt_secret)
}

pub fn create_malformed_token() -> String {
    "not.a.valid.jwt.token".to_string()
}

fn sign(user_id: &str, iat: i64, exp: i64, jwt_secret: &[u8]) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        email: format!("{user_id}@example.com"),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret),
    )
    .expect("Failed to encode JWT")
}
