use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration data of a health professional.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfessionalFieldsDto {
    pub name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub council: String,
    pub council_number: String,
    pub council_state: String,
    #[serde(default)]
    pub rqe: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub telemedicine: bool,
    pub specialty: String,
}

/// Login account created alongside a professional. The role is always `PROFESSIONAL`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfessionalUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/professionals`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateProfessionalDto {
    pub user: Option<ProfessionalUserDto>,
    pub professional: Option<ProfessionalFieldsDto>,
}

/// Body of `PUT /api/professionals/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateProfessionalDto {
    pub name: String,
    pub birth_date: NaiveDate,
    pub council: String,
    pub council_number: String,
    pub council_state: String,
    #[serde(default)]
    pub rqe: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub telemedicine: bool,
    pub specialty: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProfessionalDto {
    pub id: i32,
    pub clinic_id: i32,
    pub user_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub council: String,
    pub council_number: String,
    pub council_state: String,
    pub rqe: Option<String>,
    pub phone: String,
    pub email: String,
    pub telemedicine: bool,
    pub specialty: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfessionalSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfessionalAccountDto {
    pub id: i32,
    pub email: String,
}

/// Response of `POST /api/professionals`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatedProfessionalDto {
    pub professional: ProfessionalSummaryDto,
    pub user: ProfessionalAccountDto,
}

/// Response of `PUT /api/professionals/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdatedProfessionalDto {
    pub professional: ProfessionalDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LinkedUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatusDto {
    Available,
    Blocked,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ScheduleSlotDto {
    pub id: i32,
    pub date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ScheduleStatusDto,
}

/// Response of `GET /api/professionals/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfessionalDetailDto {
    #[serde(flatten)]
    pub professional: ProfessionalDto,
    pub user: LinkedUserDto,
    pub schedule: Vec<ScheduleSlotDto>,
}
