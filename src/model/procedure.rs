use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProcedureDto {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub telemedicine: bool,
    pub description: Option<String>,
    pub active: bool,
}

/// Body of `POST /api/procedures` and `PUT /api/procedures/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProcedureFieldsDto {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub telemedicine: bool,
    #[serde(default)]
    pub description: Option<String>,
}
