//! Bearer token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

/// Claims carried by every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: i32,
    /// Stored role string, e.g. `ADMIN`.
    pub role: String,
    pub clinic_id: i32,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
}

/// HS256 signer and verifier sharing one secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Signs a token for `user`, valid for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenSigning)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let claims = Claims {
            sub: user.id,
            role: user.role.as_str().to_string(),
            clinic_id: user.clinic_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|source| {
            InternalError::TokenSigning {
                user_id: user.id,
                source,
            }
        })
    }

    /// Validates signature and expiry of `token`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
