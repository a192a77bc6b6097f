use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::{patient::PatientDto, procedure::ProcedureDto, professional::ProfessionalDto};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatusDto {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub clinic_id: i32,
    pub patient_id: i32,
    pub professional_id: i32,
    pub insurance_plan_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub telemedicine: bool,
    pub status: AppointmentStatusDto,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/appointments`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAppointmentDto {
    pub patient_id: i32,
    pub professional_id: i32,
    #[serde(default)]
    pub insurance_plan_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub telemedicine: bool,
    #[serde(default)]
    pub status: Option<AppointmentStatusDto>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `PATCH /api/appointments/{id}`.
///
/// Omitted fields are left unchanged. `ends_at` and `notes` set to `null` are cleared.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateAppointmentDto {
    pub status: Option<AppointmentStatusDto>,
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub ends_at: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Maps a present field to `Some`, so an explicit `null` becomes `Some(None)`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Row of `GET /api/appointments`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppointmentListItemDto {
    #[serde(flatten)]
    pub appointment: AppointmentDto,
    pub patient_name: String,
    pub professional_name: String,
}

/// Response of `GET /api/appointments/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppointmentDetailDto {
    #[serde(flatten)]
    pub appointment: AppointmentDto,
    pub patient: PatientDto,
    pub professional: ProfessionalDto,
    pub procedures: Vec<ProcedureDto>,
}

/// Body of `POST /api/appointments/{id}/procedures`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct AddProceduresDto {
    pub procedure_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProceduresAddedDto {
    pub procedures_added: u64,
}
