//! Response bodies of the `/api/reports` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::MessageDto, appointment::AppointmentStatusDto};

/// Query parameters of the date-range reports.
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates; a plain `end` date covers
/// the whole day.
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::IntoParams)]
#[serde(default)]
pub struct DateRangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct AppointmentSummaryDto {
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

/// Appointment row enriched with the patient and professional names.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppointmentReportItemDto {
    pub id: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub telemedicine: bool,
    pub status: AppointmentStatusDto,
    pub patient_name: String,
    pub professional_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppointmentReportDto {
    pub total: u64,
    pub appointments: Vec<AppointmentReportItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RevenueDto {
    pub total_revenue: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InsurancePlanCountDto {
    pub insurance_plan: String,
    pub total_appointments: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InsuranceReportDto {
    pub total: u64,
    pub insurance_plans: Vec<InsurancePlanCountDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BotConversionDto {
    pub total_patients: u64,
    pub patients_with_appointment: u64,
    pub patients_without_appointment: u64,
    /// Percentage with two decimals.
    pub conversion_rate: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PatientContactDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PatientsWithoutAppointmentDto {
    pub total: u64,
    pub patients: Vec<PatientContactDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BotHoursDto {
    pub total_bot_hours: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BotSavingsDto {
    pub total_estimated_savings: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EvaluationDto {
    pub professional_feedback: Option<String>,
    pub description: Option<String>,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NpsDto {
    pub total_evaluations: u64,
    pub evaluations: Vec<EvaluationDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProcedureCountDto {
    pub procedure: String,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopProcedureVolumeDto {
    pub procedure: String,
    pub total_executions: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopProcedureRevenueDto {
    pub procedure: String,
    pub total_revenue: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopProfessionalAppointmentsDto {
    pub professional: String,
    pub total_appointments: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopProfessionalRevenueDto {
    pub professional: String,
    pub total_revenue: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProfessionalAverageHoursDto {
    pub professional: String,
    pub average_hours: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopPatientSpendingDto {
    pub patient: String,
    pub total_spent: f64,
}

/// Result of a "top" report: the winning row, or a message when nothing qualifies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TopResultDto<T> {
    Found(T),
    Empty(MessageDto),
}

impl<T> TopResultDto<T> {
    /// Wraps `value`, falling back to `message` when it is `None`.
    pub fn from_option(value: Option<T>, message: &str) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::Empty(MessageDto {
                message: message.to_string(),
            }),
        }
    }
}
