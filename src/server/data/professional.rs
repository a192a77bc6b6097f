//! Health professional data repository.
//!
//! Provides the `ProfessionalRepository` for professional records. Like patients,
//! professionals are soft-deleted and every query is scoped to a clinic.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::professional::{
    CreateProfessionalParams, Professional, UpdateProfessionalParams,
};

pub struct ProfessionalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfessionalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active professional linked to an existing user.
    ///
    /// # Returns
    /// - `Ok(Professional)` - The created professional
    /// - `Err(DbErr)` - Database error, including a unique violation on `user_id`
    pub async fn create(&self, params: CreateProfessionalParams) -> Result<Professional, DbErr> {
        let fields = params.fields;

        let entity = entity::health_professional::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(fields.name),
            birth_date: ActiveValue::Set(fields.birth_date),
            national_id: ActiveValue::Set(fields.national_id),
            council: ActiveValue::Set(fields.council),
            council_number: ActiveValue::Set(fields.council_number),
            council_state: ActiveValue::Set(fields.council_state),
            rqe: ActiveValue::Set(fields.rqe),
            phone: ActiveValue::Set(fields.phone),
            email: ActiveValue::Set(fields.email),
            telemedicine: ActiveValue::Set(fields.telemedicine),
            specialty: ActiveValue::Set(fields.specialty),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Professional::from_entity(entity))
    }

    /// Gets all active professionals of a clinic ordered by name.
    pub async fn get_active(&self, clinic_id: i32) -> Result<Vec<Professional>, DbErr> {
        let entities = entity::prelude::HealthProfessional::find()
            .filter(entity::health_professional::Column::ClinicId.eq(clinic_id))
            .filter(entity::health_professional::Column::Active.eq(true))
            .order_by_asc(entity::health_professional::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Professional::from_entity).collect())
    }

    /// Finds an active professional of the clinic by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Professional))` - Professional exists, is active and belongs to the clinic
    /// - `Ok(None)` - Missing, inactive, or owned by another clinic
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(
        &self,
        clinic_id: i32,
        id: i32,
    ) -> Result<Option<Professional>, DbErr> {
        let entity = entity::prelude::HealthProfessional::find_by_id(id)
            .filter(entity::health_professional::Column::ClinicId.eq(clinic_id))
            .filter(entity::health_professional::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Professional::from_entity))
    }

    /// Finds a professional of the clinic by ID, active or not.
    pub async fn find_by_id(
        &self,
        clinic_id: i32,
        id: i32,
    ) -> Result<Option<Professional>, DbErr> {
        let entity = entity::prelude::HealthProfessional::find_by_id(id)
            .filter(entity::health_professional::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Professional::from_entity))
    }

    /// Replaces the editable fields of an active professional of the clinic.
    ///
    /// # Returns
    /// - `Ok(Professional)` - The updated professional
    /// - `Err(DbErr::RecordNotFound)` - Missing, inactive, or owned by another clinic
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateProfessionalParams) -> Result<Professional, DbErr> {
        let professional = entity::prelude::HealthProfessional::find_by_id(params.id)
            .filter(entity::health_professional::Column::ClinicId.eq(params.clinic_id))
            .filter(entity::health_professional::Column::Active.eq(true))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Professional {} not found",
                params.id
            )))?;

        let mut active_model: entity::health_professional::ActiveModel = professional.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.birth_date = ActiveValue::Set(params.birth_date);
        active_model.council = ActiveValue::Set(params.council);
        active_model.council_number = ActiveValue::Set(params.council_number);
        active_model.council_state = ActiveValue::Set(params.council_state);
        active_model.rqe = ActiveValue::Set(params.rqe);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.email = ActiveValue::Set(params.email);
        active_model.telemedicine = ActiveValue::Set(params.telemedicine);
        active_model.specialty = ActiveValue::Set(params.specialty);

        let updated = active_model.update(self.db).await?;

        Ok(Professional::from_entity(updated))
    }

    /// Soft-deletes an active professional of the clinic.
    ///
    /// # Returns
    /// - `Ok(Some(Professional))` - The professional as it was before deactivation
    /// - `Ok(None)` - Missing, already inactive, or owned by another clinic
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(
        &self,
        clinic_id: i32,
        id: i32,
    ) -> Result<Option<Professional>, DbErr> {
        let Some(professional) = self.find_active(clinic_id, id).await? else {
            return Ok(None);
        };

        entity::prelude::HealthProfessional::update_many()
            .filter(entity::health_professional::Column::Id.eq(id))
            .col_expr(
                entity::health_professional::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(Some(professional))
    }
}
