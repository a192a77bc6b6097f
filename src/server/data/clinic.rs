//! Clinic data repository.
//!
//! Clinics are the tenant root. They are only ever created by the registration flows in
//! the auth service; every other repository filters by a clinic id.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::clinic::{Clinic, CreateClinicParams};

pub struct ClinicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClinicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new clinic.
    ///
    /// # Arguments
    /// - `params` - Registration data; blank strings are stored as-is
    ///
    /// # Returns
    /// - `Ok(Clinic)` - The created clinic
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateClinicParams) -> Result<Clinic, DbErr> {
        let entity = entity::clinic::ActiveModel {
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            tax_id: ActiveValue::Set(params.tax_id),
            legal_name: ActiveValue::Set(params.legal_name),
            postal_code: ActiveValue::Set(params.postal_code),
            street: ActiveValue::Set(params.street),
            number: ActiveValue::Set(params.number),
            complement: ActiveValue::Set(params.complement),
            district: ActiveValue::Set(params.district),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            ibge_code: ActiveValue::Set(params.ibge_code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Clinic::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Clinic>, DbErr> {
        let entity = entity::prelude::Clinic::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Clinic::from_entity))
    }
}
