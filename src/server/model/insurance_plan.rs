use crate::{
    model::insurance_plan::{CreateInsurancePlanDto, InsurancePlanDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InsurancePlan {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub active: bool,
}

impl InsurancePlan {
    pub fn from_entity(entity: entity::insurance_plan::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> InsurancePlanDto {
        InsurancePlanDto {
            id: self.id,
            clinic_id: self.clinic_id,
            name: self.name,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInsurancePlanParams {
    pub clinic_id: i32,
    pub name: String,
}

impl CreateInsurancePlanParams {
    /// # Returns
    /// - `Ok(CreateInsurancePlanParams)` - Name present, surrounding whitespace removed
    /// - `Err(AppError::BadRequest)` - Name missing or blank
    pub fn from_dto(clinic_id: i32, dto: CreateInsurancePlanDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("Field 'name' is required".to_string()))?;

        Ok(Self { clinic_id, name })
    }
}
