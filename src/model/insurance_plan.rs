use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InsurancePlanDto {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub active: bool,
}

/// Body of `POST /api/insurance-plans`; a missing name is answered with 400.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateInsurancePlanDto {
    pub name: Option<String>,
}
