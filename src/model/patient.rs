use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PatientDto {
    pub id: i32,
    pub clinic_id: i32,
    pub national_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub ibge_code: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub active: bool,
}

/// Body of `POST /api/patients`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePatientDto {
    pub national_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub ibge_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Body of `PUT /api/patients/{id}`. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdatePatientDto {
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub ibge_code: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Body of `POST /api/patients/find-or-create`, sent by the workflow engine.
///
/// Fields are optional on the wire so missing values produce a readable 400.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct FindOrCreatePatientDto {
    pub client_id: Option<i32>,
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FindOrCreateStatusDto {
    Existing,
    Created,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FindOrCreatePatientResultDto {
    pub status: FindOrCreateStatusDto,
    pub data: PatientDto,
}
