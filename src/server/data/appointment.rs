//! Appointment data repository.
//!
//! Provides the `AppointmentRepository` for appointments and their procedure links.
//! Appointments have no soft-delete; cancellation is a status change. Every query is
//! scoped to a clinic, except the link operations which take an appointment ID the
//! caller has already resolved within its clinic.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    appointment::{
        Appointment, AppointmentFilter, AppointmentWithNames, CreateAppointmentParams,
        StartOrder, UpdateAppointmentParams,
    },
    procedure::Procedure,
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new AppointmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AppointmentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment.
    ///
    /// References are not checked here; the service validates them against the clinic.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            patient_id: ActiveValue::Set(params.patient_id),
            professional_id: ActiveValue::Set(params.professional_id),
            insurance_plan_id: ActiveValue::Set(params.insurance_plan_id),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            price: ActiveValue::Set(params.price),
            telemedicine: ActiveValue::Set(params.telemedicine),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Appointment::from_entity(entity)
    }

    /// Finds an appointment of the clinic by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Appointment found in the clinic
    /// - `Ok(None)` - Missing or owned by another clinic
    /// - `Err(DbErr)` - Database error or unknown stored status
    pub async fn find_by_id(&self, clinic_id: i32, id: i32) -> Result<Option<Appointment>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?
            .map(Appointment::from_entity)
            .transpose()
    }

    /// Gets the appointments of a clinic matching `filter`, ordered by start time.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic whose appointments are loaded
    /// - `filter` - Status, modality, payer and time window conditions
    ///
    /// # Returns
    /// - `Ok(Vec<Appointment>)` - Matching appointments (empty if none)
    /// - `Err(DbErr)` - Database error or unknown stored status
    pub async fn get_filtered(
        &self,
        clinic_id: i32,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, DbErr> {
        use entity::appointment::Column;

        let mut query =
            entity::prelude::Appointment::find().filter(Column::ClinicId.eq(clinic_id));

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(telemedicine) = filter.telemedicine {
            query = query.filter(Column::Telemedicine.eq(telemedicine));
        }
        match filter.insured {
            Some(true) => query = query.filter(Column::InsurancePlanId.is_not_null()),
            Some(false) => query = query.filter(Column::InsurancePlanId.is_null()),
            None => {}
        }
        if let Some(range) = filter.range {
            query = query
                .filter(Column::StartsAt.gte(range.start))
                .filter(Column::StartsAt.lte(range.end));
        }

        query = match filter.order {
            StartOrder::OldestFirst => query.order_by_asc(Column::StartsAt),
            StartOrder::NewestFirst => query.order_by_desc(Column::StartsAt),
        };

        query
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Gets the appointments matching `filter` with their patient and professional names.
    ///
    /// Names are resolved with one query per related table and joined in memory.
    pub async fn get_with_names(
        &self,
        clinic_id: i32,
        filter: &AppointmentFilter,
    ) -> Result<Vec<AppointmentWithNames>, DbErr> {
        let appointments = self.get_filtered(clinic_id, filter).await?;

        let patient_ids: HashSet<i32> = appointments.iter().map(|a| a.patient_id).collect();
        let professional_ids: HashSet<i32> =
            appointments.iter().map(|a| a.professional_id).collect();

        let patient_names: HashMap<i32, String> = if !patient_ids.is_empty() {
            entity::prelude::Patient::find()
                .filter(entity::patient::Column::Id.is_in(patient_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        } else {
            HashMap::new()
        };

        let professional_names: HashMap<i32, String> = if !professional_ids.is_empty() {
            entity::prelude::HealthProfessional::find()
                .filter(entity::health_professional::Column::Id.is_in(professional_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentWithNames {
                patient_name: patient_names
                    .get(&appointment.patient_id)
                    .cloned()
                    .unwrap_or_default(),
                professional_name: professional_names
                    .get(&appointment.professional_id)
                    .cloned()
                    .unwrap_or_default(),
                appointment,
            })
            .collect())
    }

    /// Applies a partial update to an appointment of the clinic.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The updated appointment
    /// - `Err(DbErr::RecordNotFound)` - Missing or owned by another clinic
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateAppointmentParams) -> Result<Appointment, DbErr> {
        let appointment = entity::prelude::Appointment::find_by_id(params.id)
            .filter(entity::appointment::Column::ClinicId.eq(params.clinic_id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Appointment {} not found",
                params.id
            )))?;

        let mut active_model: entity::appointment::ActiveModel = appointment.into();

        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(starts_at) = params.starts_at {
            active_model.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = params.ends_at {
            active_model.ends_at = ActiveValue::Set(ends_at);
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(notes);
        }

        let updated = active_model.update(self.db).await?;

        Appointment::from_entity(updated)
    }

    /// Links procedures to an appointment, skipping pairs that already exist.
    ///
    /// # Arguments
    /// - `appointment_id` - Appointment already resolved within the caller's clinic
    /// - `procedure_ids` - Distinct procedure IDs already validated against the clinic
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly inserted links
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn link_procedures(
        &self,
        appointment_id: i32,
        procedure_ids: &[i32],
    ) -> Result<u64, DbErr> {
        let existing: HashSet<i32> = entity::prelude::AppointmentProcedure::find()
            .filter(entity::appointment_procedure::Column::AppointmentId.eq(appointment_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.procedure_id)
            .collect();

        let mut inserted = 0;
        for procedure_id in procedure_ids {
            if existing.contains(procedure_id) {
                continue;
            }

            entity::appointment_procedure::ActiveModel {
                appointment_id: ActiveValue::Set(appointment_id),
                procedure_id: ActiveValue::Set(*procedure_id),
            }
            .insert(self.db)
            .await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Gets every procedure linked to an appointment, ordered by name.
    pub async fn get_procedures(&self, appointment_id: i32) -> Result<Vec<Procedure>, DbErr> {
        let procedure_ids: Vec<i32> = entity::prelude::AppointmentProcedure::find()
            .filter(entity::appointment_procedure::Column::AppointmentId.eq(appointment_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.procedure_id)
            .collect();

        if procedure_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Procedure::find()
            .filter(entity::procedure::Column::Id.is_in(procedure_ids))
            .order_by_asc(entity::procedure::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Procedure::from_entity).collect())
    }

    /// Removes one procedure link.
    ///
    /// # Returns
    /// - `Ok(true)` - Link existed and was removed
    /// - `Ok(false)` - Procedure was not linked to the appointment
    pub async fn unlink_procedure(
        &self,
        appointment_id: i32,
        procedure_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::AppointmentProcedure::delete_many()
            .filter(entity::appointment_procedure::Column::AppointmentId.eq(appointment_id))
            .filter(entity::appointment_procedure::Column::ProcedureId.eq(procedure_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
