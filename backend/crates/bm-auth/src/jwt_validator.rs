use crate::{AuthError, Claims, Result as AuthErrorResult};

use bm_core::{ErrorLocation, User};

use std::panic::Location;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Seconds of clock skew tolerated on `exp` and `nbf`
const LEEWAY_SECS: u64 = 30;

/// Checks session tokens issued after OAuth sign-in and turns them into the
/// signed-in [`User`]. HS256 for a shared secret, RS256 for a provider that
/// publishes a public key.
pub struct JwtValidator {
    key: DecodingKey,
    rules: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::new(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location,
            }
        })?;

        Ok(Self::new(key, Algorithm::RS256))
    }

    fn new(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut rules = Validation::new(algorithm);
        rules.validate_exp = true;
        rules.validate_nbf = true;
        rules.leeway = LEEWAY_SECS;

        Self { key, rules }
    }

    /// Signature, expiry and claim checks
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());
        let claims = decode::<Claims>(token, &self.key, &self.rules)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                _ => AuthError::JwtDecode {
                    source: e,
                    location,
                },
            })?
            .claims;

        claims.validate()?;
        Ok(claims)
    }

    #[track_caller]
    pub fn current_user(&self, token: &str) -> AuthErrorResult<User> {
        self.validate(token).map(Claims::into_user)
    }

    /// For startup logs
    pub fn algorithm(&self) -> &'static str {
        match self.rules.algorithms.first() {
            Some(Algorithm::HS256) => "HS256",
            Some(Algorithm::RS256) => "RS256",
            _ => "unknown",
        }
    }
}
