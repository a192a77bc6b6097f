//! Patient factory for creating test patient records.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let patient = PatientFactory::new(&db, clinic.id)
///     .national_id("12345678900")
///     .phone("5511999990000")
///     .build()
///     .await?;
/// ```
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    national_id: String,
    name: String,
    phone: String,
    active: bool,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default values.
    ///
    /// Defaults:
    /// - national_id: zero-padded counter value, 11 digits
    /// - name: `"Patient {id}"`
    /// - phone: `"55119{id}"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            national_id: format!("{:011}", id),
            name: format!("Patient {}", id),
            phone: format!("55119{:08}", id),
            active: true,
        }
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the patient entity into the database.
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        entity::patient::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            email: ActiveValue::Set(format!("{}@example.test", self.national_id)),
            national_id: ActiveValue::Set(self.national_id),
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 6, 1).unwrap_or_default()),
            phone: ActiveValue::Set(self.phone),
            ibge_code: ActiveValue::Set(None),
            postal_code: ActiveValue::Set(None),
            street: ActiveValue::Set(None),
            number: ActiveValue::Set(None),
            complement: ActiveValue::Set(None),
            district: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active patient with default values.
pub async fn create_patient(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db, clinic_id).build().await
}
