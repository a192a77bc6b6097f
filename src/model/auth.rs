use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    professional::{ProfessionalFieldsDto, ProfessionalSummaryDto},
    user::{UserDto, UserRoleDto},
};

/// Credentials and role for a new login account.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRoleDto,
}

/// Body of `POST /api/auth/register`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub clinic_name: String,
    pub user: NewUserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Clinic registration data collected on first access.
///
/// Only the name is required, every other field defaults to an empty string.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct NewClinicDto {
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub legal_name: String,
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub ibge_code: String,
}

/// Body of `POST /api/auth/first-access`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FirstAccessDto {
    pub clinic: NewClinicDto,
    pub user: NewUserDto,
    pub professional: ProfessionalFieldsDto,
}

/// Login or registration result carrying the bearer token.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FirstAccessResponseDto {
    pub user: UserDto,
    pub professional: ProfessionalSummaryDto,
    pub token: String,
}

