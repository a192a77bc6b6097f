//! Health professional service for business logic.
//!
//! Professionals are always created together with a `PROFESSIONAL` login account and an
//! initial schedule slot. Deactivating a professional also deactivates the account.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        professional::ProfessionalRepository, schedule::ScheduleRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        professional::{
            CreateProfessionalParams, CreateScheduleSlotParams, CreatedProfessional,
            NewProfessionalParams, Professional, ProfessionalDetail, ProfessionalFields,
            UpdateProfessionalParams,
        },
        user::{CreateUserParams, UserRole},
    },
    service::auth::password::PasswordService,
};

pub struct ProfessionalService<'a> {
    pub db: &'a DatabaseConnection,
    pub passwords: &'a PasswordService,
}

impl<'a> ProfessionalService<'a> {
    /// Creates a new ProfessionalService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `passwords` - Hasher for the accounts created with new professionals
    ///
    /// # Returns
    /// - `ProfessionalService` - New service instance
    pub fn new(db: &'a DatabaseConnection, passwords: &'a PasswordService) -> Self {
        Self { db, passwords }
    }

    /// Registers a professional with a new `PROFESSIONAL` account.
    ///
    /// # Returns
    /// - `Ok(CreatedProfessional)` - Professional and the ID/email of its account
    /// - `Err(AppError::BadRequest)` - Account email already registered
    pub async fn create(
        &self,
        params: NewProfessionalParams,
    ) -> Result<CreatedProfessional, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.account.email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = self.passwords.hash(&params.account.password)?;
        let user = user_repo
            .create(CreateUserParams {
                clinic_id: params.clinic_id,
                name: params.account.name,
                email: params.account.email,
                password_hash,
                role: UserRole::Professional,
            })
            .await?;

        let professional = self
            .create_for_user(params.clinic_id, user.id, params.fields)
            .await?;

        Ok(CreatedProfessional {
            professional,
            user_id: user.id,
            user_email: user.email,
        })
    }

    /// Inserts the professional row for an existing account and opens its initial slot.
    pub async fn create_for_user(
        &self,
        clinic_id: i32,
        user_id: i32,
        fields: ProfessionalFields,
    ) -> Result<Professional, AppError> {
        let professional = ProfessionalRepository::new(self.db)
            .create(CreateProfessionalParams {
                clinic_id,
                user_id,
                fields,
            })
            .await?;

        ScheduleRepository::new(self.db)
            .create(CreateScheduleSlotParams::initial(clinic_id, professional.id))
            .await?;

        Ok(professional)
    }

    /// Lists the active professionals of the clinic ordered by name.
    pub async fn list(&self, clinic_id: i32) -> Result<Vec<Professional>, AppError> {
        Ok(ProfessionalRepository::new(self.db)
            .get_active(clinic_id)
            .await?)
    }

    /// Loads an active professional with its account summary and schedule.
    ///
    /// # Returns
    /// - `Ok(ProfessionalDetail)` - Professional found
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    pub async fn get(&self, clinic_id: i32, id: i32) -> Result<ProfessionalDetail, AppError> {
        let professional = ProfessionalRepository::new(self.db)
            .find_active(clinic_id, id)
            .await?
            .ok_or_else(professional_not_found)?;

        let user = UserRepository::new(self.db)
            .find_by_id(professional.user_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Professional {} references missing user {}",
                    professional.id, professional.user_id
                ))
            })?;

        let schedule = ScheduleRepository::new(self.db)
            .get_by_professional(clinic_id, professional.id)
            .await?;

        Ok(ProfessionalDetail {
            professional,
            user_id: user.id,
            user_name: user.name,
            user_email: user.email,
            schedule,
        })
    }

    /// Replaces the editable fields of an active professional.
    ///
    /// # Returns
    /// - `Ok(Professional)` - The updated professional
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    pub async fn update(&self, params: UpdateProfessionalParams) -> Result<Professional, AppError> {
        let repo = ProfessionalRepository::new(self.db);

        repo.find_active(params.clinic_id, params.id)
            .await?
            .ok_or_else(professional_not_found)?;

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a professional and deactivates its login account.
    ///
    /// # Returns
    /// - `Ok(())` - Professional and account deactivated
    /// - `Err(AppError::NotFound)` - Missing, already inactive or owned by another clinic
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<(), AppError> {
        let professional = ProfessionalRepository::new(self.db)
            .deactivate(clinic_id, id)
            .await?
            .ok_or_else(professional_not_found)?;

        UserRepository::new(self.db)
            .set_active(professional.user_id, false)
            .await?;

        tracing::info!(
            "Deactivated professional {} and user {}",
            professional.id,
            professional.user_id
        );

        Ok(())
    }
}

fn professional_not_found() -> AppError {
    AppError::NotFound("Professional not found".to_string())
}
