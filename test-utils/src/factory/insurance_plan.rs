//! Insurance plan factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test insurance plans.
pub struct InsurancePlanFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    active: bool,
}

impl<'a> InsurancePlanFactory<'a> {
    /// Creates a new factory, defaults to an active plan named `"Plan {id}"`.
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        Self {
            db,
            clinic_id,
            name: format!("Plan {}", next_id()),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::insurance_plan::Model, DbErr> {
        entity::insurance_plan::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_insurance_plan(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::insurance_plan::Model, DbErr> {
    InsurancePlanFactory::new(db, clinic_id).build().await
}
