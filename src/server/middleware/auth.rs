use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UserRole,
    service::auth::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Caller resolved from a valid bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub clinic_id: i32,
    pub role: UserRole,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the bearer token and checks the caller holds every permission.
    ///
    /// The stored user is the source of truth: a deleted or deactivated account is
    /// rejected even while its token is unexpired, and the role and clinic come from
    /// the database rather than the claims.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Authenticated caller
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or clinic mismatch
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::UserInactive)` - Account has been deactivated
    /// - `Err(AuthError::AccessDenied)` - Missing a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if user.clinic_id != claims.clinic_id {
            return Err(AuthError::InvalidToken(format!(
                "token clinic {} does not match user clinic {}",
                claims.clinic_id, user.clinic_id
            ))
            .into());
        }

        if !user.active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Endpoint requires the ADMIN role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(AuthUser {
            user_id: user.id,
            clinic_id: user.clinic_id,
            role: user.role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
