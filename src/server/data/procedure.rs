//! Procedure catalog repository.
//!
//! Names are unique per clinic across active and inactive procedures, so
//! `name_taken` does not filter on the active flag.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::procedure::{
    CreateProcedureParams, Procedure, UpdateProcedureParams,
};

pub struct ProcedureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProcedureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProcedureParams) -> Result<Procedure, DbErr> {
        let fields = params.fields;

        let entity = entity::procedure::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            name: ActiveValue::Set(fields.name),
            kind: ActiveValue::Set(fields.kind),
            price: ActiveValue::Set(fields.price),
            duration_minutes: ActiveValue::Set(fields.duration_minutes),
            telemedicine: ActiveValue::Set(fields.telemedicine),
            description: ActiveValue::Set(fields.description),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Procedure::from_entity(entity))
    }

    /// Gets all active procedures of a clinic ordered by name.
    pub async fn get_active(&self, clinic_id: i32) -> Result<Vec<Procedure>, DbErr> {
        let entities = entity::prelude::Procedure::find()
            .filter(entity::procedure::Column::ClinicId.eq(clinic_id))
            .filter(entity::procedure::Column::Active.eq(true))
            .order_by_asc(entity::procedure::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Procedure::from_entity).collect())
    }

    pub async fn find_active(&self, clinic_id: i32, id: i32) -> Result<Option<Procedure>, DbErr> {
        let entity = entity::prelude::Procedure::find_by_id(id)
            .filter(entity::procedure::Column::ClinicId.eq(clinic_id))
            .filter(entity::procedure::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Procedure::from_entity))
    }

    /// Gets the active procedures of the clinic among `ids`.
    ///
    /// IDs belonging to another clinic or to inactive procedures are silently skipped,
    /// so callers compare the result length against the distinct input IDs.
    pub async fn get_active_by_ids(
        &self,
        clinic_id: i32,
        ids: &[i32],
    ) -> Result<Vec<Procedure>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Procedure::find()
            .filter(entity::procedure::Column::ClinicId.eq(clinic_id))
            .filter(entity::procedure::Column::Active.eq(true))
            .filter(entity::procedure::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Procedure::from_entity).collect())
    }

    /// Checks whether the clinic already has a procedure named `name`.
    ///
    /// # Arguments
    /// - `exclude_id` - Procedure ignored by the check, used when renaming
    pub async fn name_taken(
        &self,
        clinic_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Procedure::find()
            .filter(entity::procedure::Column::ClinicId.eq(clinic_id))
            .filter(entity::procedure::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::procedure::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces the editable fields of an active procedure of the clinic.
    ///
    /// # Returns
    /// - `Ok(Procedure)` - The updated procedure
    /// - `Err(DbErr::RecordNotFound)` - Missing, inactive, or owned by another clinic
    pub async fn update(&self, params: UpdateProcedureParams) -> Result<Procedure, DbErr> {
        let procedure = entity::prelude::Procedure::find_by_id(params.id)
            .filter(entity::procedure::Column::ClinicId.eq(params.clinic_id))
            .filter(entity::procedure::Column::Active.eq(true))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Procedure {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active_model: entity::procedure::ActiveModel = procedure.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.kind = ActiveValue::Set(fields.kind);
        active_model.price = ActiveValue::Set(fields.price);
        active_model.duration_minutes = ActiveValue::Set(fields.duration_minutes);
        active_model.telemedicine = ActiveValue::Set(fields.telemedicine);
        active_model.description = ActiveValue::Set(fields.description);

        let updated = active_model.update(self.db).await?;

        Ok(Procedure::from_entity(updated))
    }

    /// Soft-deletes an active procedure of the clinic.
    ///
    /// # Returns
    /// - `Ok(true)` - Procedure deactivated
    /// - `Ok(false)` - Missing, already inactive, or owned by another clinic
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Procedure::update_many()
            .filter(entity::procedure::Column::Id.eq(id))
            .filter(entity::procedure::Column::ClinicId.eq(clinic_id))
            .filter(entity::procedure::Column::Active.eq(true))
            .col_expr(
                entity::procedure::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
