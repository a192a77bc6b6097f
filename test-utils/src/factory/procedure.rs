//! Procedure catalog factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test procedures.
pub struct ProcedureFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    price: Option<f64>,
    duration_minutes: Option<i32>,
    telemedicine: bool,
    active: bool,
}

impl<'a> ProcedureFactory<'a> {
    /// Creates a new ProcedureFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Procedure {id}"`
    /// - price: `Some(100.0)`
    /// - duration_minutes: `Some(30)`
    /// - telemedicine: `false`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        Self {
            db,
            clinic_id,
            name: format!("Procedure {}", next_id()),
            price: Some(100.0),
            duration_minutes: Some(30),
            telemedicine: false,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: Option<i32>) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn telemedicine(mut self, telemedicine: bool) -> Self {
        self.telemedicine = telemedicine;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::procedure::Model, DbErr> {
        entity::procedure::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(Some("CONSULTATION".to_string())),
            price: ActiveValue::Set(self.price),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            telemedicine: ActiveValue::Set(self.telemedicine),
            description: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active procedure priced at 100.0.
pub async fn create_procedure(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::procedure::Model, DbErr> {
    ProcedureFactory::new(db, clinic_id).build().await
}
