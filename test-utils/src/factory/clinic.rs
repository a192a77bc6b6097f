//! Clinic factory for creating test tenants.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clinics with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let clinic = ClinicFactory::new(&db).name("Clinica Central").build().await?;
/// ```
pub struct ClinicFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    tax_id: String,
}

impl<'a> ClinicFactory<'a> {
    /// Creates a new ClinicFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Clinic {id}"`
    /// - email: `"clinic{id}@example.test"`
    /// - tax_id: zero-padded counter value
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Clinic {}", id),
            email: format!("clinic{}@example.test", id),
            tax_id: format!("{:014}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the clinic entity into the database.
    pub async fn build(self) -> Result<entity::clinic::Model, DbErr> {
        entity::clinic::ActiveModel {
            name: ActiveValue::Set(self.name.clone()),
            phone: ActiveValue::Set("11999990000".to_string()),
            email: ActiveValue::Set(self.email),
            tax_id: ActiveValue::Set(self.tax_id),
            legal_name: ActiveValue::Set(format!("{} LTDA", self.name)),
            postal_code: ActiveValue::Set("01001000".to_string()),
            street: ActiveValue::Set("Praca da Se".to_string()),
            number: ActiveValue::Set("1".to_string()),
            complement: ActiveValue::Set(None),
            district: ActiveValue::Set("Se".to_string()),
            city: ActiveValue::Set("Sao Paulo".to_string()),
            state: ActiveValue::Set("SP".to_string()),
            ibge_code: ActiveValue::Set("3550308".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clinic with default values.
///
/// Shorthand for `ClinicFactory::new(db).build().await`.
pub async fn create_clinic(db: &DatabaseConnection) -> Result<entity::clinic::Model, DbErr> {
    ClinicFactory::new(db).build().await
}
