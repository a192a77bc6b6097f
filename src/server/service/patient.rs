//! Patient service for business logic.
//!
//! Enforces national id uniqueness within a clinic and implements the lookup-or-register
//! flow used by the WhatsApp bot.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{clinic::ClinicRepository, patient::PatientRepository},
    error::AppError,
    model::patient::{
        CreatePatientParams, FindOrCreateOutcome, FindOrCreatePatientParams, Patient,
        UpdatePatientParams,
    },
};

pub struct PatientService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PatientService<'a> {
    /// Creates a new PatientService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PatientService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a patient in the clinic.
    ///
    /// # Returns
    /// - `Ok(Patient)` - The created patient
    /// - `Err(AppError::BadRequest)` - National id already registered in the clinic
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, AppError> {
        let repo = PatientRepository::new(self.db);

        if repo
            .national_id_taken(params.clinic_id, &params.national_id, None)
            .await?
        {
            return Err(national_id_taken());
        }

        Ok(repo.create(params).await?)
    }

    /// Lists the active patients of the clinic ordered by name.
    pub async fn list(&self, clinic_id: i32) -> Result<Vec<Patient>, AppError> {
        Ok(PatientRepository::new(self.db).get_active(clinic_id).await?)
    }

    /// # Returns
    /// - `Ok(Patient)` - Active patient of the clinic
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    pub async fn get(&self, clinic_id: i32, id: i32) -> Result<Patient, AppError> {
        PatientRepository::new(self.db)
            .find_active(clinic_id, id)
            .await?
            .ok_or_else(patient_not_found)
    }

    /// Applies a partial update to an active patient.
    ///
    /// # Returns
    /// - `Ok(Patient)` - The updated patient
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    /// - `Err(AppError::BadRequest)` - New national id belongs to another patient
    pub async fn update(&self, params: UpdatePatientParams) -> Result<Patient, AppError> {
        let repo = PatientRepository::new(self.db);

        repo.find_active(params.clinic_id, params.id)
            .await?
            .ok_or_else(patient_not_found)?;

        if let Some(national_id) = &params.national_id {
            if repo
                .national_id_taken(params.clinic_id, national_id, Some(params.id))
                .await?
            {
                return Err(national_id_taken());
            }
        }

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a patient.
    ///
    /// # Returns
    /// - `Ok(())` - Patient deactivated
    /// - `Err(AppError::NotFound)` - Missing, already inactive or owned by another clinic
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<(), AppError> {
        if !PatientRepository::new(self.db)
            .deactivate(clinic_id, id)
            .await?
        {
            return Err(patient_not_found());
        }

        Ok(())
    }

    /// Returns the clinic's patient with the given national id, registering it when absent.
    ///
    /// Matches inactive patients too. When the stored phone or email differ from the
    /// request they are overwritten.
    ///
    /// # Returns
    /// - `Ok((Existing, Patient))` - Patient already registered, contact refreshed if needed
    /// - `Ok((Created, Patient))` - New patient registered
    /// - `Err(AppError::NotFound)` - The clinic does not exist
    pub async fn find_or_create(
        &self,
        params: FindOrCreatePatientParams,
    ) -> Result<(FindOrCreateOutcome, Patient), AppError> {
        ClinicRepository::new(self.db)
            .find_by_id(params.clinic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Clinic not found".to_string()))?;

        let repo = PatientRepository::new(self.db);

        match repo
            .find_by_national_id(params.clinic_id, &params.national_id)
            .await?
        {
            Some(patient) if patient.phone == params.phone && patient.email == params.email => {
                Ok((FindOrCreateOutcome::Existing, patient))
            }
            Some(patient) => {
                tracing::debug!("Refreshing contact data of patient {}", patient.id);
                let patient = repo
                    .update_contact(patient.id, params.phone, params.email)
                    .await?;
                Ok((FindOrCreateOutcome::Existing, patient))
            }
            None => {
                let patient = repo.create(params.into_create_params()).await?;
                tracing::info!(
                    "Registered patient {} for clinic {} from bot",
                    patient.id,
                    patient.clinic_id
                );
                Ok((FindOrCreateOutcome::Created, patient))
            }
        }
    }
}

fn patient_not_found() -> AppError {
    AppError::NotFound("Patient not found".to_string())
}

fn national_id_taken() -> AppError {
    AppError::BadRequest("National id already registered for this clinic".to_string())
}
