use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure hashing a password or parsing a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Failure signing a bearer token.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign token for user {user_id}: {source}")]
    TokenSigning {
        /// The user the token was being issued for
        user_id: i32,
        /// The underlying signing error
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}
