//! Account registration and password login.
//!
//! `AuthService` creates clinics with their first accounts and exchanges credentials
//! for bearer tokens. Token and password primitives live in the `token` and
//! `password` submodules and are shared through `AppState`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        auth::NewAccount,
        user::{CreateUserParams, User},
    },
    service::auth::{password::PasswordService, token::TokenService},
};

pub mod first_access;
pub mod login;
pub mod password;
pub mod register;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    pub passwords: &'a PasswordService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Signer used for issued bearer tokens
    /// - `passwords` - Hasher used for new and presented passwords
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        passwords: &'a PasswordService,
    ) -> Self {
        Self {
            db,
            tokens,
            passwords,
        }
    }

    /// Fails with 400 when `email` already belongs to an account of any clinic.
    async fn ensure_email_available(&self, email: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db).email_exists(email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        Ok(())
    }

    /// Hashes the password of `account` and stores it under `clinic_id`.
    async fn create_account(&self, clinic_id: i32, account: NewAccount) -> Result<User, AppError> {
        let password_hash = self.passwords.hash(&account.password)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                clinic_id,
                name: account.name,
                email: account.email,
                password_hash,
                role: account.role,
            })
            .await?;

        Ok(user)
    }
}
