//! Patient domain models and parameters.
//!
//! Includes the partial update parameters used by `PUT /api/patients/{id}` and the
//! lookup parameters used by the bot's find-or-create flow.

use chrono::NaiveDate;

use crate::{
    model::patient::{
        CreatePatientDto, FindOrCreatePatientDto, FindOrCreateStatusDto, PatientDto,
        UpdatePatientDto,
    },
    server::error::AppError,
};

/// Birth date stored for patients registered by the bot without one.
pub fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub clinic_id: i32,
    pub national_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: PatientAddress,
    pub active: bool,
}

/// Optional postal address of a patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientAddress {
    pub ibge_code: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Patient {
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            national_id: entity.national_id,
            name: entity.name,
            birth_date: entity.birth_date,
            email: entity.email,
            phone: entity.phone,
            address: PatientAddress {
                ibge_code: entity.ibge_code,
                postal_code: entity.postal_code,
                street: entity.street,
                number: entity.number,
                complement: entity.complement,
                district: entity.district,
                city: entity.city,
                state: entity.state,
            },
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            id: self.id,
            clinic_id: self.clinic_id,
            national_id: self.national_id,
            name: self.name,
            birth_date: self.birth_date,
            email: self.email,
            phone: self.phone,
            ibge_code: self.address.ibge_code,
            postal_code: self.address.postal_code,
            street: self.address.street,
            number: self.address.number,
            complement: self.address.complement,
            district: self.address.district,
            city: self.address.city,
            state: self.address.state,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePatientParams {
    pub clinic_id: i32,
    pub national_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: PatientAddress,
}

impl CreatePatientParams {
    pub fn from_dto(clinic_id: i32, dto: CreatePatientDto) -> Self {
        Self {
            clinic_id,
            national_id: dto.national_id,
            name: dto.name,
            birth_date: dto.birth_date,
            email: dto.email,
            phone: dto.phone,
            address: PatientAddress {
                ibge_code: dto.ibge_code,
                postal_code: dto.postal_code,
                street: dto.street,
                number: dto.number,
                complement: dto.complement,
                district: dto.district,
                city: dto.city,
                state: dto.state,
            },
        }
    }
}

/// Partial update of a patient. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePatientParams {
    pub id: i32,
    pub clinic_id: i32,
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: PatientAddress,
}

impl UpdatePatientParams {
    pub fn from_dto(id: i32, clinic_id: i32, dto: UpdatePatientDto) -> Self {
        Self {
            id,
            clinic_id,
            national_id: dto.national_id,
            name: dto.name,
            birth_date: dto.birth_date,
            email: dto.email,
            phone: dto.phone,
            address: PatientAddress {
                ibge_code: dto.ibge_code,
                postal_code: dto.postal_code,
                street: dto.street,
                number: dto.number,
                complement: dto.complement,
                district: dto.district,
                city: dto.city,
                state: dto.state,
            },
        }
    }
}

/// Lookup-or-register request coming from the bot.
#[derive(Debug, Clone)]
pub struct FindOrCreatePatientParams {
    pub clinic_id: i32,
    pub national_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
}

impl FindOrCreatePatientParams {
    /// Validates the bot payload.
    ///
    /// # Returns
    /// - `Ok(FindOrCreatePatientParams)` - Every required field present and non-blank
    /// - `Err(AppError::BadRequest)` - `client_id`, `national_id`, `name`, `phone` or
    ///   `email` missing
    pub fn from_dto(dto: FindOrCreatePatientDto) -> Result<Self, AppError> {
        let missing = || {
            AppError::BadRequest(
                "Required fields: client_id, national_id, name, phone, email".to_string(),
            )
        };
        let required = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Ok(Self {
            clinic_id: dto.client_id.ok_or_else(missing)?,
            national_id: required(dto.national_id).ok_or_else(missing)?,
            name: required(dto.name).ok_or_else(missing)?,
            birth_date: dto.birth_date.unwrap_or_else(default_birth_date),
            email: required(dto.email).ok_or_else(missing)?,
            phone: required(dto.phone).ok_or_else(missing)?,
        })
    }

    pub fn into_create_params(self) -> CreatePatientParams {
        CreatePatientParams {
            clinic_id: self.clinic_id,
            national_id: self.national_id,
            name: self.name,
            birth_date: self.birth_date,
            email: self.email,
            phone: self.phone,
            address: PatientAddress::default(),
        }
    }
}

/// Whether find-or-create matched an existing patient or registered a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOrCreateOutcome {
    Existing,
    Created,
}

impl FindOrCreateOutcome {
    pub fn into_dto(self) -> FindOrCreateStatusDto {
        match self {
            Self::Existing => FindOrCreateStatusDto::Existing,
            Self::Created => FindOrCreateStatusDto::Created,
        }
    }
}
