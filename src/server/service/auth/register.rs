use crate::server::{
    data::clinic::ClinicRepository,
    error::AppError,
    model::{
        auth::{AuthSession, RegisterParams},
        clinic::CreateClinicParams,
    },
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Creates a clinic with blank contact data and its first account.
    ///
    /// The clinic takes the account's email as its contact address.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - New user and a token for it
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        self.ensure_email_available(&params.account.email).await?;

        let clinic = ClinicRepository::new(self.db)
            .create(CreateClinicParams::named(
                params.clinic_name,
                params.account.email.clone(),
            ))
            .await?;

        let user = self.create_account(clinic.id, params.account).await?;
        let token = self.tokens.issue(&user)?;

        tracing::info!("Registered clinic {} with user {}", clinic.id, user.id);

        Ok(AuthSession { user, token })
    }
}
