//! Appointment factory for creating test bookings.
//!
//! The referenced patient and professional must already exist; see
//! `helpers::create_appointment_with_dependencies` to create them in one call.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, clinic.id, patient.id, professional.id)
///     .status("COMPLETED")
///     .price(Some(250.0))
///     .telemedicine(true)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    professional_id: i32,
    insurance_plan_id: Option<i32>,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    price: Option<f64>,
    telemedicine: bool,
    status: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - starts_at: one day from now
    /// - ends_at: `None`
    /// - insurance_plan_id: `None`
    /// - price: `Some(150.0)`
    /// - telemedicine: `false`
    /// - status: `"SCHEDULED"`
    pub fn new(
        db: &'a DatabaseConnection,
        clinic_id: i32,
        patient_id: i32,
        professional_id: i32,
    ) -> Self {
        Self {
            db,
            clinic_id,
            patient_id,
            professional_id,
            insurance_plan_id: None,
            starts_at: Utc::now() + Duration::days(1),
            ends_at: None,
            price: Some(150.0),
            telemedicine: false,
            status: "SCHEDULED".to_string(),
        }
    }

    pub fn insurance_plan_id(mut self, insurance_plan_id: Option<i32>) -> Self {
        self.insurance_plan_id = insurance_plan_id;
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn ends_at(mut self, ends_at: Option<DateTime<Utc>>) -> Self {
        self.ends_at = ends_at;
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn telemedicine(mut self, telemedicine: bool) -> Self {
        self.telemedicine = telemedicine;
        self
    }

    /// Sets the stored status string, e.g. `"COMPLETED"` or `"NO_SHOW"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the appointment entity into the database.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            patient_id: ActiveValue::Set(self.patient_id),
            professional_id: ActiveValue::Set(self.professional_id),
            insurance_plan_id: ActiveValue::Set(self.insurance_plan_id),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            price: ActiveValue::Set(self.price),
            telemedicine: ActiveValue::Set(self.telemedicine),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    professional_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, clinic_id, patient_id, professional_id)
        .build()
        .await
}
