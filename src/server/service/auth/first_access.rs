use crate::server::{
    data::clinic::ClinicRepository,
    error::AppError,
    model::auth::{FirstAccessParams, FirstAccessSession},
    service::{auth::AuthService, professional::ProfessionalService},
};

impl<'a> AuthService<'a> {
    /// Onboards a clinic: clinic, first account, its professional record and the
    /// professional's initial schedule slot.
    ///
    /// # Returns
    /// - `Ok(FirstAccessSession)` - Created user, professional and token
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn first_access(
        &self,
        params: FirstAccessParams,
    ) -> Result<FirstAccessSession, AppError> {
        self.ensure_email_available(&params.account.email).await?;

        let clinic = ClinicRepository::new(self.db).create(params.clinic).await?;
        let user = self.create_account(clinic.id, params.account).await?;

        let professional = ProfessionalService::new(self.db, self.passwords)
            .create_for_user(clinic.id, user.id, params.professional)
            .await?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            "First access completed for clinic {} (user {}, professional {})",
            clinic.id,
            user.id,
            professional.id
        );

        Ok(FirstAccessSession {
            user,
            professional,
            token,
        })
    }
}
