//! Appointment domain models and parameters.
//!
//! Appointments link a patient and a professional of the same clinic, optionally under
//! an insurance plan, and may carry any number of catalog procedures.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::appointment::{
        AppointmentDetailDto, AppointmentDto, AppointmentListItemDto, AppointmentStatusDto,
        CreateAppointmentDto, UpdateAppointmentDto,
    },
    server::model::{
        patient::Patient, procedure::Procedure, professional::Professional, report::DateRange,
    },
};

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
        }
    }

    /// Parses the stored representation of a status.
    ///
    /// # Returns
    /// - `Ok(AppointmentStatus)` - Known status
    /// - `Err(DbErr::Custom)` - Stored value is not a known status
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "SCHEDULED" => Ok(Self::Scheduled),
            "CONFIRMED" => Ok(Self::Confirmed),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            "NO_SHOW" => Ok(Self::NoShow),
            other => Err(DbErr::Custom(format!(
                "Unknown appointment status '{}'",
                other
            ))),
        }
    }

    pub fn from_dto(dto: AppointmentStatusDto) -> Self {
        match dto {
            AppointmentStatusDto::Scheduled => Self::Scheduled,
            AppointmentStatusDto::Confirmed => Self::Confirmed,
            AppointmentStatusDto::Completed => Self::Completed,
            AppointmentStatusDto::Cancelled => Self::Cancelled,
            AppointmentStatusDto::NoShow => Self::NoShow,
        }
    }

    pub fn into_dto(self) -> AppointmentStatusDto {
        match self {
            Self::Scheduled => AppointmentStatusDto::Scheduled,
            Self::Confirmed => AppointmentStatusDto::Confirmed,
            Self::Completed => AppointmentStatusDto::Completed,
            Self::Cancelled => AppointmentStatusDto::Cancelled,
            Self::NoShow => AppointmentStatusDto::NoShow,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub clinic_id: i32,
    pub patient_id: i32,
    pub professional_id: i32,
    /// `None` for private (out-of-pocket) appointments.
    pub insurance_plan_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub telemedicine: bool,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to an appointment domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The converted appointment
    /// - `Err(DbErr::Custom)` - Stored status is not a known value
    pub fn from_entity(entity: entity::appointment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            patient_id: entity.patient_id,
            professional_id: entity.professional_id,
            insurance_plan_id: entity.insurance_plan_id,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            price: entity.price,
            telemedicine: entity.telemedicine,
            status: AppointmentStatus::from_db(&entity.status)?,
            notes: entity.notes,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            clinic_id: self.clinic_id,
            patient_id: self.patient_id,
            professional_id: self.professional_id,
            insurance_plan_id: self.insurance_plan_id,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            price: self.price,
            telemedicine: self.telemedicine,
            status: self.status.into_dto(),
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Duration in hours, when the appointment has an end time.
    pub fn duration_hours(&self) -> Option<f64> {
        self.ends_at
            .map(|ends_at| (ends_at - self.starts_at).num_milliseconds() as f64 / 3_600_000.0)
    }
}

/// Sort direction on appointment start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Conditions applied when loading appointments for a report. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub telemedicine: Option<bool>,
    /// `Some(true)` keeps insured appointments only, `Some(false)` private ones only.
    pub insured: Option<bool>,
    pub range: Option<DateRange>,
    pub order: StartOrder,
}

/// Appointment with the display names of its patient and professional.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentWithNames {
    pub appointment: Appointment,
    pub patient_name: String,
    pub professional_name: String,
}

impl AppointmentWithNames {
    pub fn into_dto(self) -> AppointmentListItemDto {
        AppointmentListItemDto {
            appointment: self.appointment.into_dto(),
            patient_name: self.patient_name,
            professional_name: self.professional_name,
        }
    }
}

/// Appointment with its related records, for the detail view.
#[derive(Debug, Clone)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub patient: Patient,
    pub professional: Professional,
    pub procedures: Vec<Procedure>,
}

impl AppointmentDetail {
    pub fn into_dto(self) -> AppointmentDetailDto {
        AppointmentDetailDto {
            appointment: self.appointment.into_dto(),
            patient: self.patient.into_dto(),
            professional: self.professional.into_dto(),
            procedures: self.procedures.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub clinic_id: i32,
    pub patient_id: i32,
    pub professional_id: i32,
    pub insurance_plan_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub telemedicine: bool,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl CreateAppointmentParams {
    pub fn from_dto(clinic_id: i32, dto: CreateAppointmentDto) -> Self {
        Self {
            clinic_id,
            patient_id: dto.patient_id,
            professional_id: dto.professional_id,
            insurance_plan_id: dto.insurance_plan_id,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            price: dto.price,
            telemedicine: dto.telemedicine,
            status: dto
                .status
                .map(AppointmentStatus::from_dto)
                .unwrap_or_default(),
            notes: dto.notes,
        }
    }
}

/// Partial update of an appointment. `None` keeps the stored value, `Some(None)` clears
/// a nullable column.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParams {
    pub id: i32,
    pub clinic_id: i32,
    pub status: Option<AppointmentStatus>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<Option<DateTime<Utc>>>,
    pub notes: Option<Option<String>>,
}

impl UpdateAppointmentParams {
    pub fn from_dto(id: i32, clinic_id: i32, dto: UpdateAppointmentDto) -> Self {
        Self {
            id,
            clinic_id,
            status: dto.status.map(AppointmentStatus::from_dto),
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            notes: dto.notes,
        }
    }
}
