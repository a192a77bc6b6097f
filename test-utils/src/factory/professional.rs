//! Health professional factory.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test health professionals.
///
/// Every professional is linked one-to-one with a login user, so the user must exist
/// before `build()` is called.
pub struct ProfessionalFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    user_id: i32,
    name: String,
    specialty: String,
    telemedicine: bool,
    active: bool,
}

impl<'a> ProfessionalFactory<'a> {
    /// Creates a new ProfessionalFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Professional {id}"`
    /// - specialty: `"General Practice"`
    /// - telemedicine: `false`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            user_id,
            name: format!("Professional {}", id),
            specialty: "General Practice".to_string(),
            telemedicine: false,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
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

    /// Builds and inserts the professional entity into the database.
    pub async fn build(self) -> Result<entity::health_professional::Model, DbErr> {
        let id = next_id();
        entity::health_professional::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1985, 3, 12).unwrap_or_default()),
            national_id: ActiveValue::Set(format!("{:011}", id)),
            council: ActiveValue::Set("CRM".to_string()),
            council_number: ActiveValue::Set(format!("{:06}", id)),
            council_state: ActiveValue::Set("SP".to_string()),
            rqe: ActiveValue::Set(None),
            phone: ActiveValue::Set("11988887777".to_string()),
            email: ActiveValue::Set(format!("professional{}@example.test", id)),
            telemedicine: ActiveValue::Set(self.telemedicine),
            specialty: ActiveValue::Set(self.specialty),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a professional with default values for an existing user.
pub async fn create_professional(
    db: &DatabaseConnection,
    clinic_id: i32,
    user_id: i32,
) -> Result<entity::health_professional::Model, DbErr> {
    ProfessionalFactory::new(db, clinic_id, user_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_professional_with_dependencies};

    #[tokio::test]
    async fn creates_professional_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_appointment_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, user, professional) = create_professional_with_dependencies(db).await?;

        assert_eq!(professional.clinic_id, clinic.id);
        assert_eq!(professional.user_id, user.id);
        assert_eq!(user.role, "PROFESSIONAL");
        assert!(professional.active);

        Ok(())
    }
}
