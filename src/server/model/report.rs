//! Report domain models and query parameters.
//!
//! Reports load tenant-scoped rows through `ReportRepository` and reduce them in memory
//! with the functions in `service::report::aggregate`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::report::{
        AppointmentReportDto, AppointmentReportItemDto, AppointmentSummaryDto,
        BotConversionDto, DateRangeQuery, EvaluationDto, InsurancePlanCountDto,
        InsuranceReportDto, NpsDto, PatientContactDto, PatientsWithoutAppointmentDto,
    },
    server::{
        error::AppError,
        model::{
            appointment::{AppointmentStatus, AppointmentWithNames},
            patient::Patient,
        },
        util::parse::{parse_range_bound, RangeBound},
    },
};

/// Inclusive time window applied to appointment start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Parses the `start`/`end` query parameters.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - Both bounds present and valid
    /// - `Err(AppError::BadRequest)` - A bound is missing, malformed, or `end` precedes `start`
    pub fn from_query(query: DateRangeQuery) -> Result<Self, AppError> {
        let (Some(start), Some(end)) = (query.start, query.end) else {
            return Err(AppError::BadRequest(
                "Query parameters 'start' and 'end' are required".to_string(),
            ));
        };

        let start = parse_range_bound(&start, RangeBound::Start)?;
        let end = parse_range_bound(&end, RangeBound::End)?;

        if end < start {
            return Err(AppError::BadRequest(
                "'end' must not be before 'start'".to_string(),
            ));
        }

        Ok(Self { start, end })
    }
}

impl AppointmentWithNames {
    pub fn into_report_dto(self) -> AppointmentReportItemDto {
        AppointmentReportItemDto {
            id: self.appointment.id,
            starts_at: self.appointment.starts_at,
            ends_at: self.appointment.ends_at,
            price: self.appointment.price,
            telemedicine: self.appointment.telemedicine,
            status: self.appointment.status.into_dto(),
            patient_name: self.patient_name,
            professional_name: self.professional_name,
        }
    }
}

/// Counts of appointments by status, modality and payer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentSummary {
    pub total: u64,
    pub scheduled: u64,
    pub confirmed: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub no_show: u64,
    pub in_person: u64,
    pub telemedicine: u64,
    pub private: u64,
    pub insurance: u64,
}

impl AppointmentSummary {
    pub fn into_dto(self) -> AppointmentSummaryDto {
        AppointmentSummaryDto {
            total: self.total,
            scheduled: self.scheduled,
            confirmed: self.confirmed,
            completed: self.completed,
            cancelled: self.cancelled,
            no_show: self.no_show,
            in_person: self.in_person,
            telemedicine: self.telemedicine,
            private: self.private,
            insurance: self.insurance,
        }
    }
}

/// One procedure linked to one appointment, with the data the procedure reports need.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureExecution {
    pub appointment_id: i32,
    pub patient_id: i32,
    pub appointment_status: AppointmentStatus,
    pub procedure_id: i32,
    pub procedure_name: String,
    pub procedure_price: Option<f64>,
}

/// Operational metrics recorded for a day of bot activity.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationalControl {
    pub reference_date: NaiveDate,
    pub bot_hours_worked: f64,
    pub estimated_savings: f64,
}

impl OperationalControl {
    pub fn from_entity(entity: entity::operational_control::Model) -> Self {
        Self {
            reference_date: entity.reference_date,
            bot_hours_worked: entity.bot_hours_worked,
            estimated_savings: entity.estimated_savings,
        }
    }
}

/// Satisfaction survey answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub professional_feedback: Option<String>,
    pub description: Option<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn from_entity(entity: entity::evaluation::Model) -> Self {
        Self {
            professional_feedback: entity.professional_feedback,
            description: entity.description,
            evaluated_at: entity.evaluated_at,
        }
    }

    pub fn into_dto(self) -> EvaluationDto {
        EvaluationDto {
            professional_feedback: self.professional_feedback,
            description: self.description,
            evaluated_at: self.evaluated_at,
        }
    }
}

/// Appointments listed by a report, with names resolved.
#[derive(Debug, Clone)]
pub struct AppointmentReport {
    pub appointments: Vec<AppointmentWithNames>,
}

impl AppointmentReport {
    pub fn into_dto(self) -> AppointmentReportDto {
        AppointmentReportDto {
            total: self.appointments.len() as u64,
            appointments: self
                .appointments
                .into_iter()
                .map(|a| a.into_report_dto())
                .collect(),
        }
    }
}

/// Completed insured appointments counted per plan.
#[derive(Debug, Clone, PartialEq)]
pub struct InsuranceReport {
    pub total: u64,
    /// `(plan name, appointments)`, busiest plan first.
    pub plans: Vec<(String, u64)>,
}

impl InsuranceReport {
    pub fn into_dto(self) -> InsuranceReportDto {
        InsuranceReportDto {
            total: self.total,
            insurance_plans: self
                .plans
                .into_iter()
                .map(|(insurance_plan, total_appointments)| InsurancePlanCountDto {
                    insurance_plan,
                    total_appointments,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotConversion {
    pub total_patients: u64,
    pub with_appointment: u64,
    /// Percentage of active patients with at least one appointment, two decimals.
    pub rate: f64,
}

impl BotConversion {
    pub fn into_dto(self) -> BotConversionDto {
        BotConversionDto {
            total_patients: self.total_patients,
            patients_with_appointment: self.with_appointment,
            patients_without_appointment: self.total_patients - self.with_appointment,
            conversion_rate: self.rate,
        }
    }
}

/// Active patients that talked to the bot but never booked.
#[derive(Debug, Clone)]
pub struct PatientsWithoutAppointment {
    pub patients: Vec<Patient>,
}

impl PatientsWithoutAppointment {
    pub fn into_dto(self) -> PatientsWithoutAppointmentDto {
        PatientsWithoutAppointmentDto {
            total: self.patients.len() as u64,
            patients: self
                .patients
                .into_iter()
                .map(|p| PatientContactDto {
                    id: p.id,
                    name: p.name,
                    email: p.email,
                    phone: p.phone,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Nps {
    pub evaluations: Vec<Evaluation>,
}

impl Nps {
    pub fn into_dto(self) -> NpsDto {
        NpsDto {
            total_evaluations: self.evaluations.len() as u64,
            evaluations: self.evaluations.into_iter().map(|e| e.into_dto()).collect(),
        }
    }
}

/// A named entry of a ranking report, such as a procedure and its execution count.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub name: String,
    pub value: T,
}
