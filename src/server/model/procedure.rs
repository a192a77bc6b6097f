//! Procedure catalog domain models and parameters.

use crate::model::procedure::{ProcedureDto, ProcedureFieldsDto};

/// Billable item of a clinic's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    /// Free-form category, such as "exam" or "consultation".
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub telemedicine: bool,
    pub description: Option<String>,
    pub active: bool,
}

impl Procedure {
    pub fn from_entity(entity: entity::procedure::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            kind: entity.kind,
            price: entity.price,
            duration_minutes: entity.duration_minutes,
            telemedicine: entity.telemedicine,
            description: entity.description,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> ProcedureDto {
        ProcedureDto {
            id: self.id,
            clinic_id: self.clinic_id,
            name: self.name,
            kind: self.kind,
            price: self.price,
            duration_minutes: self.duration_minutes,
            telemedicine: self.telemedicine,
            description: self.description,
            active: self.active,
        }
    }
}

/// Editable fields of a procedure, shared by create and update.
#[derive(Debug, Clone)]
pub struct ProcedureFields {
    pub name: String,
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub telemedicine: bool,
    pub description: Option<String>,
}

impl ProcedureFields {
    pub fn from_dto(dto: ProcedureFieldsDto) -> Self {
        Self {
            name: dto.name,
            kind: dto.kind,
            price: dto.price,
            duration_minutes: dto.duration_minutes,
            telemedicine: dto.telemedicine,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProcedureParams {
    pub clinic_id: i32,
    pub fields: ProcedureFields,
}

#[derive(Debug, Clone)]
pub struct UpdateProcedureParams {
    pub id: i32,
    pub clinic_id: i32,
    pub fields: ProcedureFields,
}
