use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or format validation, or names a different clinic
    /// than the stored user.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token subject no longer exists in the database.
    #[error("User ID {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Account exists but has been deactivated.
    #[error("User ID {0} is inactive")]
    UserInactive(i32),

    /// Login password did not match the stored hash.
    #[error("Invalid password for user ID {0}")]
    InvalidPassword(i32),

    /// User is authenticated but lacks the role required by the endpoint.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Description of the attempted action, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Gateway request did not present the configured `X-Gateway-Key`.
    #[error("Missing or invalid gateway key")]
    InvalidGatewayKey,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 with "Invalid or missing token"
/// - `UserInactive` → 401 with "User is inactive"
/// - `InvalidPassword` → 401 with "Invalid password"
/// - `InvalidGatewayKey` → 401 with "Invalid gateway key"
/// - `AccessDenied` → 403 with "Access denied"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or missing token")
            }
            Self::UserInactive(_) => (StatusCode::UNAUTHORIZED, "User is inactive"),
            Self::InvalidPassword(_) => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::InvalidGatewayKey => (StatusCode::UNAUTHORIZED, "Invalid gateway key"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
