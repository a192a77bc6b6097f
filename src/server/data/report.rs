//! Report data repository.
//!
//! Loads the tenant-scoped rows the reports reduce in memory. Appointment rows come
//! from `AppointmentRepository::get_filtered`; this repository covers the remaining
//! tables and the name lookups used to label aggregated results.

use std::collections::{HashMap, HashSet};

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::{
    appointment::AppointmentStatus,
    patient::Patient,
    report::{Evaluation, OperationalControl, ProcedureExecution},
};

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every procedure link of the clinic's appointments.
    ///
    /// Each row carries the appointment's patient and status along with the procedure
    /// name and catalog price, which is all the procedure and spending reports need.
    ///
    /// # Returns
    /// - `Ok(Vec<ProcedureExecution>)` - One row per appointment/procedure pair
    /// - `Err(DbErr)` - Database error or unknown stored status
    pub async fn procedure_executions(
        &self,
        clinic_id: i32,
    ) -> Result<Vec<ProcedureExecution>, DbErr> {
        use entity::{appointment, appointment_procedure, procedure};

        let rows: Vec<(i32, i32, i32, String, String, Option<f64>)> =
            entity::prelude::AppointmentProcedure::find()
                .select_only()
                .column(appointment_procedure::Column::AppointmentId)
                .column(appointment_procedure::Column::ProcedureId)
                .column(appointment::Column::PatientId)
                .column(appointment::Column::Status)
                .column(procedure::Column::Name)
                .column(procedure::Column::Price)
                .join(
                    JoinType::InnerJoin,
                    appointment_procedure::Relation::Appointment.def(),
                )
                .join(
                    JoinType::InnerJoin,
                    appointment_procedure::Relation::Procedure.def(),
                )
                .filter(appointment::Column::ClinicId.eq(clinic_id))
                .filter(procedure::Column::ClinicId.eq(clinic_id))
                .order_by_asc(appointment_procedure::Column::AppointmentId)
                .order_by_asc(appointment_procedure::Column::ProcedureId)
                .into_tuple()
                .all(self.db)
                .await?;

        rows.into_iter()
            .map(
                |(appointment_id, procedure_id, patient_id, status, name, price)| {
                    Ok(ProcedureExecution {
                        appointment_id,
                        patient_id,
                        appointment_status: AppointmentStatus::from_db(&status)?,
                        procedure_id,
                        procedure_name: name,
                        procedure_price: price,
                    })
                },
            )
            .collect()
    }

    /// Gets the IDs of the clinic's active patients.
    pub async fn active_patient_ids(&self, clinic_id: i32) -> Result<HashSet<i32>, DbErr> {
        let ids = entity::prelude::Patient::find()
            .select_only()
            .column(entity::patient::Column::Id)
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Gets the IDs of patients with at least one appointment in the clinic.
    pub async fn patient_ids_with_appointments(
        &self,
        clinic_id: i32,
    ) -> Result<HashSet<i32>, DbErr> {
        let ids = entity::prelude::Appointment::find()
            .select_only()
            .column(entity::appointment::Column::PatientId)
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Gets the IDs of patients with a bot interaction of one of `kinds`.
    pub async fn patient_ids_with_interactions(
        &self,
        clinic_id: i32,
        kinds: &[&str],
    ) -> Result<HashSet<i32>, DbErr> {
        let ids = entity::prelude::BotInteraction::find()
            .select_only()
            .column(entity::bot_interaction::Column::PatientId)
            .filter(entity::bot_interaction::Column::ClinicId.eq(clinic_id))
            .filter(entity::bot_interaction::Column::Kind.is_in(kinds.to_vec()))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Gets active patients of the clinic among `ids`, ordered by name.
    pub async fn active_patients_by_ids(
        &self,
        clinic_id: i32,
        ids: &HashSet<i32>,
    ) -> Result<Vec<Patient>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Patient::find()
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .filter(entity::patient::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::patient::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Patient::from_entity).collect())
    }

    pub async fn operational_controls(
        &self,
        clinic_id: i32,
    ) -> Result<Vec<OperationalControl>, DbErr> {
        let entities = entity::prelude::OperationalControl::find()
            .filter(entity::operational_control::Column::ClinicId.eq(clinic_id))
            .order_by_asc(entity::operational_control::Column::ReferenceDate)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(OperationalControl::from_entity)
            .collect())
    }

    /// Gets the clinic's evaluations, newest first.
    pub async fn evaluations(&self, clinic_id: i32) -> Result<Vec<Evaluation>, DbErr> {
        let entities = entity::prelude::Evaluation::find()
            .filter(entity::evaluation::Column::ClinicId.eq(clinic_id))
            .order_by_desc(entity::evaluation::Column::EvaluatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Evaluation::from_entity).collect())
    }

    /// Maps professional IDs of the clinic to names, including inactive professionals.
    pub async fn professional_names(&self, clinic_id: i32) -> Result<HashMap<i32, String>, DbErr> {
        let rows = entity::prelude::HealthProfessional::find()
            .select_only()
            .column(entity::health_professional::Column::Id)
            .column(entity::health_professional::Column::Name)
            .filter(entity::health_professional::Column::ClinicId.eq(clinic_id))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Maps patient IDs of the clinic to names, including inactive patients.
    pub async fn patient_names(&self, clinic_id: i32) -> Result<HashMap<i32, String>, DbErr> {
        let rows = entity::prelude::Patient::find()
            .select_only()
            .column(entity::patient::Column::Id)
            .column(entity::patient::Column::Name)
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Maps insurance plan IDs of the clinic to names, including inactive plans.
    pub async fn insurance_plan_names(
        &self,
        clinic_id: i32,
    ) -> Result<HashMap<i32, String>, DbErr> {
        let rows = entity::prelude::InsurancePlan::find()
            .select_only()
            .column(entity::insurance_plan::Column::Id)
            .column(entity::insurance_plan::Column::Name)
            .filter(entity::insurance_plan::Column::ClinicId.eq(clinic_id))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
