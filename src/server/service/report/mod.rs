//! Reporting service.
//!
//! Every report is restricted to the caller's clinic. Rows are loaded through
//! `ReportRepository`/`AppointmentRepository` and reduced with the pure functions in
//! `aggregate`.

pub mod aggregate;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, report::ReportRepository},
    error::AppError,
    model::{
        appointment::{AppointmentFilter, AppointmentStatus, StartOrder},
        report::{
            AppointmentReport, AppointmentSummary, BotConversion, DateRange, InsuranceReport,
            Nps, PatientsWithoutAppointment, Ranked,
        },
    },
};

/// Interaction kinds that count as a patient reaching out to the bot.
const ENGAGED_INTERACTION_KINDS: [&str; 2] = ["QUESTION", "SCHEDULING"];

pub struct ReportService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReportService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Totals of appointments starting within `range`.
    pub async fn appointment_summary(
        &self,
        clinic_id: i32,
        range: DateRange,
    ) -> Result<AppointmentSummary, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_filtered(
                clinic_id,
                &AppointmentFilter {
                    range: Some(range),
                    ..Default::default()
                },
            )
            .await?;

        Ok(aggregate::summarize(&appointments))
    }

    /// `NO_SHOW` appointments within `range`, oldest first.
    pub async fn no_shows(
        &self,
        clinic_id: i32,
        range: DateRange,
    ) -> Result<AppointmentReport, AppError> {
        self.appointment_report(
            clinic_id,
            AppointmentFilter {
                status: Some(AppointmentStatus::NoShow),
                range: Some(range),
                ..Default::default()
            },
        )
        .await
    }

    /// Sum of prices of completed appointments within `range`.
    pub async fn revenue(&self, clinic_id: i32, range: DateRange) -> Result<f64, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_filtered(
                clinic_id,
                &AppointmentFilter {
                    status: Some(AppointmentStatus::Completed),
                    range: Some(range),
                    ..Default::default()
                },
            )
            .await?;

        Ok(aggregate::total_price(&appointments))
    }

    /// Cancelled appointments, newest first.
    pub async fn cancelled(&self, clinic_id: i32) -> Result<AppointmentReport, AppError> {
        self.appointment_report(
            clinic_id,
            AppointmentFilter {
                status: Some(AppointmentStatus::Cancelled),
                order: StartOrder::NewestFirst,
                ..Default::default()
            },
        )
        .await
    }

    /// Completed appointments paid out of pocket, newest first.
    pub async fn private(&self, clinic_id: i32) -> Result<AppointmentReport, AppError> {
        self.appointment_report(
            clinic_id,
            AppointmentFilter {
                status: Some(AppointmentStatus::Completed),
                insured: Some(false),
                order: StartOrder::NewestFirst,
                ..Default::default()
            },
        )
        .await
    }

    /// Completed appointments of one modality, newest first.
    pub async fn by_modality(
        &self,
        clinic_id: i32,
        telemedicine: bool,
    ) -> Result<AppointmentReport, AppError> {
        self.appointment_report(
            clinic_id,
            AppointmentFilter {
                status: Some(AppointmentStatus::Completed),
                telemedicine: Some(telemedicine),
                order: StartOrder::NewestFirst,
                ..Default::default()
            },
        )
        .await
    }

    /// Completed insured appointments grouped by plan name, busiest plan first.
    pub async fn insurance(&self, clinic_id: i32) -> Result<InsuranceReport, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_filtered(
                clinic_id,
                &AppointmentFilter {
                    status: Some(AppointmentStatus::Completed),
                    insured: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        let names = ReportRepository::new(self.db)
            .insurance_plan_names(clinic_id)
            .await?;

        let mut plans: Vec<(String, u64)> = aggregate::count_by_key(
            appointments
                .iter()
                .filter_map(|a| a.insurance_plan_id)
                .map(|id| names.get(&id).cloned().unwrap_or_else(unknown_name)),
        );
        plans.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(InsuranceReport {
            total: appointments.len() as u64,
            plans,
        })
    }

    /// Share of active patients that booked at least one appointment.
    pub async fn bot_conversion(&self, clinic_id: i32) -> Result<BotConversion, AppError> {
        let repo = ReportRepository::new(self.db);
        let active = repo.active_patient_ids(clinic_id).await?;
        let booked = repo.patient_ids_with_appointments(clinic_id).await?;

        let total_patients = active.len() as u64;
        let with_appointment = active.intersection(&booked).count() as u64;

        Ok(BotConversion {
            total_patients,
            with_appointment,
            rate: aggregate::conversion_rate(with_appointment, total_patients),
        })
    }

    /// Active patients that asked a question or tried to schedule but never booked.
    pub async fn without_appointment(
        &self,
        clinic_id: i32,
    ) -> Result<PatientsWithoutAppointment, AppError> {
        let repo = ReportRepository::new(self.db);
        let engaged = repo
            .patient_ids_with_interactions(clinic_id, &ENGAGED_INTERACTION_KINDS)
            .await?;
        let booked = repo.patient_ids_with_appointments(clinic_id).await?;

        let candidates: HashSet<i32> = engaged.difference(&booked).copied().collect();
        let patients = repo.active_patients_by_ids(clinic_id, &candidates).await?;

        Ok(PatientsWithoutAppointment { patients })
    }

    pub async fn bot_hours(&self, clinic_id: i32) -> Result<f64, AppError> {
        let controls = ReportRepository::new(self.db)
            .operational_controls(clinic_id)
            .await?;

        Ok(controls.iter().map(|c| c.bot_hours_worked).sum())
    }

    pub async fn bot_savings(&self, clinic_id: i32) -> Result<f64, AppError> {
        let controls = ReportRepository::new(self.db)
            .operational_controls(clinic_id)
            .await?;

        Ok(controls.iter().map(|c| c.estimated_savings).sum())
    }

    /// Satisfaction evaluations, newest first.
    pub async fn nps(&self, clinic_id: i32) -> Result<Nps, AppError> {
        let evaluations = ReportRepository::new(self.db).evaluations(clinic_id).await?;

        Ok(Nps { evaluations })
    }

    /// Executions per procedure across all appointments, most executed first.
    pub async fn procedures_performed(&self, clinic_id: i32) -> Result<Vec<Ranked<u64>>, AppError> {
        let executions = ReportRepository::new(self.db)
            .procedure_executions(clinic_id)
            .await?;

        let mut ranked: Vec<Ranked<u64>> =
            aggregate::count_by_key(executions.iter().map(|e| e.procedure_name.clone()))
                .into_iter()
                .map(|(name, value)| Ranked { name, value })
                .collect();
        ranked.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));

        Ok(ranked)
    }

    /// Procedure linked to the most appointments.
    pub async fn top_procedure_by_volume(
        &self,
        clinic_id: i32,
    ) -> Result<Option<Ranked<u64>>, AppError> {
        let executions = ReportRepository::new(self.db)
            .procedure_executions(clinic_id)
            .await?;

        let counts = aggregate::count_by_key(executions.iter().map(|e| e.procedure_id));

        Ok(aggregate::top(&counts).map(|(id, value)| Ranked {
            name: procedure_name(&executions, id),
            value,
        }))
    }

    /// Procedure with the highest catalog price summed over its appointment links.
    pub async fn top_procedure_by_revenue(
        &self,
        clinic_id: i32,
    ) -> Result<Option<Ranked<f64>>, AppError> {
        let executions = ReportRepository::new(self.db)
            .procedure_executions(clinic_id)
            .await?;

        let sums = aggregate::sum_by_key(
            executions
                .iter()
                .map(|e| (e.procedure_id, e.procedure_price.unwrap_or(0.0))),
        );

        Ok(aggregate::top(&sums).map(|(id, value)| Ranked {
            name: procedure_name(&executions, id),
            value,
        }))
    }

    /// Professional with the most completed appointments.
    pub async fn top_professional_by_appointments(
        &self,
        clinic_id: i32,
    ) -> Result<Option<Ranked<u64>>, AppError> {
        let appointments = self.completed(clinic_id).await?;
        let counts = aggregate::count_by_key(appointments.iter().map(|a| a.professional_id));

        self.name_professional(clinic_id, aggregate::top(&counts))
            .await
    }

    /// Professional with the highest summed price of completed, priced appointments.
    pub async fn top_professional_by_revenue(
        &self,
        clinic_id: i32,
    ) -> Result<Option<Ranked<f64>>, AppError> {
        let appointments = self.completed(clinic_id).await?;
        let sums = aggregate::sum_by_key(
            appointments
                .iter()
                .filter_map(|a| a.price.map(|price| (a.professional_id, price))),
        );

        self.name_professional(clinic_id, aggregate::top(&sums))
            .await
    }

    /// Mean appointment duration per professional for one modality, any status.
    ///
    /// Appointments without an end time are skipped. Ordered by professional name.
    pub async fn average_hours(
        &self,
        clinic_id: i32,
        telemedicine: bool,
    ) -> Result<Vec<Ranked<f64>>, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_filtered(
                clinic_id,
                &AppointmentFilter {
                    telemedicine: Some(telemedicine),
                    ..Default::default()
                },
            )
            .await?;
        let names = ReportRepository::new(self.db)
            .professional_names(clinic_id)
            .await?;

        let mut averages: Vec<Ranked<f64>> = aggregate::average_hours(&appointments)
            .into_iter()
            .map(|(id, value)| Ranked {
                name: names.get(&id).cloned().unwrap_or_else(unknown_name),
                value,
            })
            .collect();
        averages.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(averages)
    }

    /// Patient with the highest summed procedure price over completed appointments.
    pub async fn top_patient_by_spending(
        &self,
        clinic_id: i32,
    ) -> Result<Option<Ranked<f64>>, AppError> {
        let repo = ReportRepository::new(self.db);
        let executions = repo.procedure_executions(clinic_id).await?;

        let sums = aggregate::sum_by_key(
            executions
                .iter()
                .filter(|e| e.appointment_status == AppointmentStatus::Completed)
                .map(|e| (e.patient_id, e.procedure_price.unwrap_or(0.0))),
        );

        let Some((patient_id, value)) = aggregate::top(&sums) else {
            return Ok(None);
        };
        let names = repo.patient_names(clinic_id).await?;

        Ok(Some(Ranked {
            name: names.get(&patient_id).cloned().unwrap_or_else(unknown_name),
            value,
        }))
    }

    async fn appointment_report(
        &self,
        clinic_id: i32,
        filter: AppointmentFilter,
    ) -> Result<AppointmentReport, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_with_names(clinic_id, &filter)
            .await?;

        Ok(AppointmentReport { appointments })
    }

    async fn completed(
        &self,
        clinic_id: i32,
    ) -> Result<Vec<crate::server::model::appointment::Appointment>, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .get_filtered(
                clinic_id,
                &AppointmentFilter {
                    status: Some(AppointmentStatus::Completed),
                    ..Default::default()
                },
            )
            .await?)
    }

    async fn name_professional<T>(
        &self,
        clinic_id: i32,
        top: Option<(i32, T)>,
    ) -> Result<Option<Ranked<T>>, AppError> {
        let Some((professional_id, value)) = top else {
            return Ok(None);
        };
        let names = ReportRepository::new(self.db)
            .professional_names(clinic_id)
            .await?;

        Ok(Some(Ranked {
            name: names
                .get(&professional_id)
                .cloned()
                .unwrap_or_else(unknown_name),
            value,
        }))
    }
}

fn procedure_name(
    executions: &[crate::server::model::report::ProcedureExecution],
    procedure_id: i32,
) -> String {
    executions
        .iter()
        .find(|e| e.procedure_id == procedure_id)
        .map(|e| e.procedure_name.clone())
        .unwrap_or_else(unknown_name)
}

fn unknown_name() -> String {
    "Unknown".to_string()
}
