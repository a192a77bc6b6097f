use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::{AuthSession, LoginParams},
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Exchanges email and password for a bearer token.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Credentials valid and account active
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AuthError::InvalidPassword)` - Password does not match
    /// - `Err(AuthError::UserInactive)` - Account deactivated
    pub async fn login(&self, params: LoginParams) -> Result<AuthSession, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !self.passwords.verify(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidPassword(user.id).into());
        }

        if !user.active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        let token = self.tokens.issue(&user)?;

        Ok(AuthSession { user, token })
    }
}
