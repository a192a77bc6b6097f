//! Password hashing with PBKDF2-SHA256.

use pbkdf2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Params, Pbkdf2,
};

use crate::server::error::internal::InternalError;

const OUTPUT_LENGTH: usize = 32;

/// Produces and checks PHC-format password hashes (`$pbkdf2-sha256$i=...`).
///
/// The iteration count only applies to new hashes; verification reads it from the
/// stored string, so the count can be raised without invalidating existing accounts.
#[derive(Clone, Debug)]
pub struct PasswordService {
    rounds: u32,
}

impl PasswordService {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC string to store
    /// - `Err(InternalError::PasswordHash)` - Salt encoding or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        let hash = Pbkdf2
            .hash_password_customized(
                password.as_bytes(),
                Some(Algorithm::Pbkdf2Sha256.ident()),
                None,
                Params {
                    rounds: self.rounds,
                    output_length: OUTPUT_LENGTH,
                },
                &salt,
            )
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Checks `password` against a stored PHC string.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(InternalError::PasswordHash)` - Stored hash is malformed
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, InternalError> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        match Pbkdf2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(InternalError::PasswordHash(e.to_string())),
        }
    }
}
