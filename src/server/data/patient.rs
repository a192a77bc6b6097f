//! Patient data repository.
//!
//! Every query is scoped to a clinic id. "Active" lookups hide soft-deleted patients,
//! while national id lookups see every patient of the clinic because the
//! `(clinic_id, national_id)` pair is unique regardless of the active flag.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::patient::{CreatePatientParams, Patient, UpdatePatientParams};

pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active patient.
    ///
    /// # Returns
    /// - `Ok(Patient)` - The created patient
    /// - `Err(DbErr)` - Database error, including a unique violation on the national id
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, DbErr> {
        let entity = entity::patient::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            national_id: ActiveValue::Set(params.national_id),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            ibge_code: ActiveValue::Set(params.address.ibge_code),
            postal_code: ActiveValue::Set(params.address.postal_code),
            street: ActiveValue::Set(params.address.street),
            number: ActiveValue::Set(params.address.number),
            complement: ActiveValue::Set(params.address.complement),
            district: ActiveValue::Set(params.address.district),
            city: ActiveValue::Set(params.address.city),
            state: ActiveValue::Set(params.address.state),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Patient::from_entity(entity))
    }

    /// Gets all active patients of a clinic ordered by name.
    pub async fn get_active(&self, clinic_id: i32) -> Result<Vec<Patient>, DbErr> {
        let entities = entity::prelude::Patient::find()
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .order_by_asc(entity::patient::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Patient::from_entity).collect())
    }

    /// Finds an active patient of the clinic by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Patient))` - Patient exists, is active and belongs to the clinic
    /// - `Ok(None)` - Missing, inactive, or owned by another clinic
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(&self, clinic_id: i32, id: i32) -> Result<Option<Patient>, DbErr> {
        let entity = entity::prelude::Patient::find_by_id(id)
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Patient::from_entity))
    }

    /// Finds a patient of the clinic by ID, active or not.
    ///
    /// Used where historical records must still resolve, such as appointment details.
    pub async fn find_by_id(&self, clinic_id: i32, id: i32) -> Result<Option<Patient>, DbErr> {
        let entity = entity::prelude::Patient::find_by_id(id)
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Patient::from_entity))
    }

    /// Finds a patient of the clinic by national id, active or not.
    pub async fn find_by_national_id(
        &self,
        clinic_id: i32,
        national_id: &str,
    ) -> Result<Option<Patient>, DbErr> {
        let entity = entity::prelude::Patient::find()
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::NationalId.eq(national_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Patient::from_entity))
    }

    /// Checks whether another patient of the clinic already uses `national_id`.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic to search
    /// - `national_id` - National id to look for
    /// - `exclude_id` - Patient ignored by the check, used when updating
    pub async fn national_id_taken(
        &self,
        clinic_id: i32,
        national_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Patient::find()
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::NationalId.eq(national_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::patient::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update to an active patient of the clinic.
    ///
    /// Fields left as `None` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Patient)` - The updated patient
    /// - `Err(DbErr::RecordNotFound)` - Patient missing, inactive, or owned by another clinic
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdatePatientParams) -> Result<Patient, DbErr> {
        let patient = entity::prelude::Patient::find_by_id(params.id)
            .filter(entity::patient::Column::ClinicId.eq(params.clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Patient {} not found",
                params.id
            )))?;

        let mut active_model: entity::patient::ActiveModel = patient.into();

        if let Some(national_id) = params.national_id {
            active_model.national_id = ActiveValue::Set(national_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(birth_date) = params.birth_date {
            active_model.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }

        let address = params.address;
        if address.ibge_code.is_some() {
            active_model.ibge_code = ActiveValue::Set(address.ibge_code);
        }
        if address.postal_code.is_some() {
            active_model.postal_code = ActiveValue::Set(address.postal_code);
        }
        if address.street.is_some() {
            active_model.street = ActiveValue::Set(address.street);
        }
        if address.number.is_some() {
            active_model.number = ActiveValue::Set(address.number);
        }
        if address.complement.is_some() {
            active_model.complement = ActiveValue::Set(address.complement);
        }
        if address.district.is_some() {
            active_model.district = ActiveValue::Set(address.district);
        }
        if address.city.is_some() {
            active_model.city = ActiveValue::Set(address.city);
        }
        if address.state.is_some() {
            active_model.state = ActiveValue::Set(address.state);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Patient::from_entity(updated))
    }

    /// Overwrites the phone and email of a patient.
    pub async fn update_contact(
        &self,
        id: i32,
        phone: String,
        email: String,
    ) -> Result<Patient, DbErr> {
        let patient = entity::prelude::Patient::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Patient {} not found", id)))?;

        let mut active_model: entity::patient::ActiveModel = patient.into();
        active_model.phone = ActiveValue::Set(phone);
        active_model.email = ActiveValue::Set(email);

        let updated = active_model.update(self.db).await?;

        Ok(Patient::from_entity(updated))
    }

    /// Soft-deletes an active patient of the clinic.
    ///
    /// # Returns
    /// - `Ok(true)` - Patient was active and is now inactive
    /// - `Ok(false)` - Patient missing, already inactive, or owned by another clinic
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Patient::update_many()
            .filter(entity::patient::Column::Id.eq(id))
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .filter(entity::patient::Column::Active.eq(true))
            .col_expr(
                entity::patient::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
