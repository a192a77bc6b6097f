//! Health professional domain models and parameters.
//!
//! A professional is always linked 1:1 to a `PROFESSIONAL` login account and owns a set
//! of schedule slots. The creation parameters therefore carry both the account and the
//! registration data.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::professional::{
        CreateProfessionalDto, CreatedProfessionalDto, LinkedUserDto, ProfessionalAccountDto,
        ProfessionalDetailDto, ProfessionalDto, ProfessionalFieldsDto, ProfessionalSummaryDto,
        ProfessionalUserDto, ScheduleSlotDto, ScheduleStatusDto, UpdateProfessionalDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Professional {
    pub id: i32,
    pub clinic_id: i32,
    pub user_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub council: String,
    pub council_number: String,
    pub council_state: String,
    /// Specialist registration number, when the professional has one.
    pub rqe: Option<String>,
    pub phone: String,
    pub email: String,
    pub telemedicine: bool,
    pub specialty: String,
    pub active: bool,
}

impl Professional {
    pub fn from_entity(entity: entity::health_professional::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            user_id: entity.user_id,
            name: entity.name,
            birth_date: entity.birth_date,
            national_id: entity.national_id,
            council: entity.council,
            council_number: entity.council_number,
            council_state: entity.council_state,
            rqe: entity.rqe,
            phone: entity.phone,
            email: entity.email,
            telemedicine: entity.telemedicine,
            specialty: entity.specialty,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> ProfessionalDto {
        ProfessionalDto {
            id: self.id,
            clinic_id: self.clinic_id,
            user_id: self.user_id,
            name: self.name,
            birth_date: self.birth_date,
            national_id: self.national_id,
            council: self.council,
            council_number: self.council_number,
            council_state: self.council_state,
            rqe: self.rqe,
            phone: self.phone,
            email: self.email,
            telemedicine: self.telemedicine,
            specialty: self.specialty,
            active: self.active,
        }
    }

    pub fn into_summary_dto(self) -> ProfessionalSummaryDto {
        ProfessionalSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Registration data of a professional, excluding the login account.
#[derive(Debug, Clone)]
pub struct ProfessionalFields {
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
}

impl ProfessionalFields {
    pub fn from_dto(dto: ProfessionalFieldsDto) -> Self {
        Self {
            name: dto.name,
            birth_date: dto.birth_date,
            national_id: dto.national_id,
            council: dto.council,
            council_number: dto.council_number,
            council_state: dto.council_state,
            rqe: dto.rqe,
            phone: dto.phone,
            email: dto.email,
            telemedicine: dto.telemedicine,
            specialty: dto.specialty,
        }
    }
}

/// Login account created together with a professional.
#[derive(Debug, Clone)]
pub struct ProfessionalAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ProfessionalAccount {
    pub fn from_dto(dto: ProfessionalUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Professional registered by an admin together with a new login account.
#[derive(Debug, Clone)]
pub struct NewProfessionalParams {
    pub clinic_id: i32,
    pub account: ProfessionalAccount,
    pub fields: ProfessionalFields,
}

impl NewProfessionalParams {
    /// # Returns
    /// - `Ok(NewProfessionalParams)` - Both the account and the registration data present
    /// - `Err(AppError::BadRequest)` - `user` or `professional` missing
    pub fn from_dto(clinic_id: i32, dto: CreateProfessionalDto) -> Result<Self, AppError> {
        let (Some(user), Some(professional)) = (dto.user, dto.professional) else {
            return Err(AppError::BadRequest(
                "Fields 'user' and 'professional' are required".to_string(),
            ));
        };

        Ok(Self {
            clinic_id,
            account: ProfessionalAccount::from_dto(user),
            fields: ProfessionalFields::from_dto(professional),
        })
    }
}

/// Parameters for inserting the professional row once its user exists.
#[derive(Debug, Clone)]
pub struct CreateProfessionalParams {
    pub clinic_id: i32,
    pub user_id: i32,
    pub fields: ProfessionalFields,
}

/// Full replacement of the editable fields; the national id cannot change.
#[derive(Debug, Clone)]
pub struct UpdateProfessionalParams {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub council: String,
    pub council_number: String,
    pub council_state: String,
    pub rqe: Option<String>,
    pub phone: String,
    pub email: String,
    pub telemedicine: bool,
    pub specialty: String,
}

impl UpdateProfessionalParams {
    pub fn from_dto(id: i32, clinic_id: i32, dto: UpdateProfessionalDto) -> Self {
        Self {
            id,
            clinic_id,
            name: dto.name,
            birth_date: dto.birth_date,
            council: dto.council,
            council_number: dto.council_number,
            council_state: dto.council_state,
            rqe: dto.rqe,
            phone: dto.phone,
            email: dto.email,
            telemedicine: dto.telemedicine,
            specialty: dto.specialty,
        }
    }
}

/// Result of creating a professional: the professional and its login account.
#[derive(Debug, Clone)]
pub struct CreatedProfessional {
    pub professional: Professional,
    pub user_id: i32,
    pub user_email: String,
}

impl CreatedProfessional {
    pub fn into_dto(self) -> CreatedProfessionalDto {
        CreatedProfessionalDto {
            professional: self.professional.into_summary_dto(),
            user: ProfessionalAccountDto {
                id: self.user_id,
                email: self.user_email,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Available,
    Blocked,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Blocked => "BLOCKED",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "AVAILABLE" => Ok(Self::Available),
            "BLOCKED" => Ok(Self::Blocked),
            other => Err(DbErr::Custom(format!("Unknown schedule status '{}'", other))),
        }
    }

    pub fn into_dto(self) -> ScheduleStatusDto {
        match self {
            Self::Available => ScheduleStatusDto::Available,
            Self::Blocked => ScheduleStatusDto::Blocked,
        }
    }
}

/// Availability slot of a professional.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub id: i32,
    pub professional_id: i32,
    pub date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ScheduleStatus,
}

impl ScheduleSlot {
    pub fn from_entity(entity: entity::schedule::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            professional_id: entity.professional_id,
            date: entity.date,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            status: ScheduleStatus::from_db(&entity.status)?,
        })
    }

    pub fn into_dto(self) -> ScheduleSlotDto {
        ScheduleSlotDto {
            id: self.id,
            date: self.date,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            status: self.status.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleSlotParams {
    pub clinic_id: i32,
    pub professional_id: i32,
    pub date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ScheduleStatus,
}

impl CreateScheduleSlotParams {
    /// Open slot starting and ending now, created with every new professional.
    pub fn initial(clinic_id: i32, professional_id: i32) -> Self {
        let now = Utc::now();
        Self {
            clinic_id,
            professional_id,
            date: now.date_naive(),
            starts_at: now,
            ends_at: now,
            status: ScheduleStatus::Available,
        }
    }
}

/// Professional with the linked account summary and schedule, for the detail view.
#[derive(Debug, Clone)]
pub struct ProfessionalDetail {
    pub professional: Professional,
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub schedule: Vec<ScheduleSlot>,
}

impl ProfessionalDetail {
    pub fn into_dto(self) -> ProfessionalDetailDto {
        ProfessionalDetailDto {
            professional: self.professional.into_dto(),
            user: LinkedUserDto {
                id: self.user_id,
                name: self.user_name,
                email: self.user_email,
            },
            schedule: self.schedule.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}
