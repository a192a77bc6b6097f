//! Appointment service for business logic.
//!
//! Validates that every reference of an appointment (patient, professional, insurance
//! plan, procedures) belongs to the caller's clinic before anything is written.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, insurance_plan::InsurancePlanRepository,
        patient::PatientRepository, procedure::ProcedureRepository,
        professional::ProfessionalRepository,
    },
    error::AppError,
    model::{
        appointment::{
            Appointment, AppointmentDetail, AppointmentFilter, AppointmentWithNames,
            CreateAppointmentParams, UpdateAppointmentParams,
        },
        procedure::Procedure,
    },
};

pub struct AppointmentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new AppointmentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AppointmentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(AppError::BadRequest)` - A reference is missing, inactive or owned by another
    ///   clinic, or the end time precedes the start time
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, AppError> {
        if PatientRepository::new(self.db)
            .find_active(params.clinic_id, params.patient_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Patient not found in this clinic".to_string(),
            ));
        }

        if ProfessionalRepository::new(self.db)
            .find_active(params.clinic_id, params.professional_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Professional not found in this clinic".to_string(),
            ));
        }

        if let Some(plan_id) = params.insurance_plan_id {
            if InsurancePlanRepository::new(self.db)
                .find_active(params.clinic_id, plan_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(
                    "Insurance plan not found in this clinic".to_string(),
                ));
            }
        }

        if let Some(ends_at) = params.ends_at {
            if ends_at < params.starts_at {
                return Err(ends_before_start());
            }
        }

        Ok(AppointmentRepository::new(self.db).create(params).await?)
    }

    /// Lists the clinic's appointments with patient and professional names, by start time.
    pub async fn list(&self, clinic_id: i32) -> Result<Vec<AppointmentWithNames>, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .get_with_names(clinic_id, &AppointmentFilter::default())
            .await?)
    }

    /// Loads an appointment with its patient, professional and linked procedures.
    ///
    /// Deactivated patients and professionals still resolve here.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetail)` - Appointment of the clinic
    /// - `Err(AppError::NotFound)` - Missing or owned by another clinic
    pub async fn get(&self, clinic_id: i32, id: i32) -> Result<AppointmentDetail, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let appointment = self.find(clinic_id, id).await?;

        let patient = PatientRepository::new(self.db)
            .find_by_id(clinic_id, appointment.patient_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Appointment {} references missing patient {}",
                    appointment.id, appointment.patient_id
                ))
            })?;

        let professional = ProfessionalRepository::new(self.db)
            .find_by_id(clinic_id, appointment.professional_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Appointment {} references missing professional {}",
                    appointment.id, appointment.professional_id
                ))
            })?;

        let procedures = repo.get_procedures(appointment.id).await?;

        Ok(AppointmentDetail {
            appointment,
            patient,
            professional,
            procedures,
        })
    }

    /// Applies a partial update of status, times and notes.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The updated appointment
    /// - `Err(AppError::NotFound)` - Missing or owned by another clinic
    /// - `Err(AppError::BadRequest)` - Resulting end time precedes the start time
    pub async fn update(&self, params: UpdateAppointmentParams) -> Result<Appointment, AppError> {
        let current = self.find(params.clinic_id, params.id).await?;

        let starts_at = params.starts_at.unwrap_or(current.starts_at);
        if let Some(ends_at) = params.ends_at.unwrap_or(current.ends_at) {
            if ends_at < starts_at {
                return Err(ends_before_start());
            }
        }

        Ok(AppointmentRepository::new(self.db).update(params).await?)
    }

    /// Links catalog procedures to an appointment. Pairs already linked are left as is.
    ///
    /// # Arguments
    /// - `clinic_id` - Caller's clinic
    /// - `id` - Appointment ID
    /// - `procedure_ids` - Procedures to link; duplicates are ignored
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of distinct procedures requested
    /// - `Err(AppError::BadRequest)` - Empty list, or a procedure is not an active
    ///   procedure of the clinic
    /// - `Err(AppError::NotFound)` - Appointment missing or owned by another clinic
    pub async fn add_procedures(
        &self,
        clinic_id: i32,
        id: i32,
        mut procedure_ids: Vec<i32>,
    ) -> Result<u64, AppError> {
        if procedure_ids.is_empty() {
            return Err(AppError::BadRequest(
                "Provide at least one procedure".to_string(),
            ));
        }

        let appointment = self.find(clinic_id, id).await?;

        procedure_ids.sort_unstable();
        procedure_ids.dedup();

        let found = ProcedureRepository::new(self.db)
            .get_active_by_ids(clinic_id, &procedure_ids)
            .await?;
        if found.len() != procedure_ids.len() {
            return Err(AppError::BadRequest(
                "One or more procedures do not belong to this clinic".to_string(),
            ));
        }

        let inserted = AppointmentRepository::new(self.db)
            .link_procedures(appointment.id, &procedure_ids)
            .await?;

        tracing::debug!(
            "Linked {} new procedures to appointment {}",
            inserted,
            appointment.id
        );

        Ok(procedure_ids.len() as u64)
    }

    /// # Returns
    /// - `Ok(Vec<Procedure>)` - Procedures linked to the appointment, ordered by name
    /// - `Err(AppError::NotFound)` - Appointment missing or owned by another clinic
    pub async fn list_procedures(
        &self,
        clinic_id: i32,
        id: i32,
    ) -> Result<Vec<Procedure>, AppError> {
        let appointment = self.find(clinic_id, id).await?;

        Ok(AppointmentRepository::new(self.db)
            .get_procedures(appointment.id)
            .await?)
    }

    /// Unlinks one procedure from an appointment.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(AppError::NotFound)` - Appointment missing, owned by another clinic, or the
    ///   procedure was not linked
    pub async fn remove_procedure(
        &self,
        clinic_id: i32,
        id: i32,
        procedure_id: i32,
    ) -> Result<(), AppError> {
        let appointment = self.find(clinic_id, id).await?;

        if !AppointmentRepository::new(self.db)
            .unlink_procedure(appointment.id, procedure_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Procedure is not linked to this appointment".to_string(),
            ));
        }

        Ok(())
    }

    async fn find(&self, clinic_id: i32, id: i32) -> Result<Appointment, AppError> {
        AppointmentRepository::new(self.db)
            .find_by_id(clinic_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }
}

fn ends_before_start() -> AppError {
    AppError::BadRequest("'ends_at' must not be before 'starts_at'".to_string())
}
