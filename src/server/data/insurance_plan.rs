use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::insurance_plan::{CreateInsurancePlanParams, InsurancePlan};

/// Insurance plans accepted by a clinic.
pub struct InsurancePlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InsurancePlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateInsurancePlanParams) -> Result<InsurancePlan, DbErr> {
        let entity = entity::insurance_plan::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            name: ActiveValue::Set(params.name),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InsurancePlan::from_entity(entity))
    }

    /// Gets all active plans of a clinic ordered by name.
    pub async fn get_active(&self, clinic_id: i32) -> Result<Vec<InsurancePlan>, DbErr> {
        let entities = entity::prelude::InsurancePlan::find()
            .filter(entity::insurance_plan::Column::ClinicId.eq(clinic_id))
            .filter(entity::insurance_plan::Column::Active.eq(true))
            .order_by_asc(entity::insurance_plan::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InsurancePlan::from_entity).collect())
    }

    pub async fn find_active(
        &self,
        clinic_id: i32,
        id: i32,
    ) -> Result<Option<InsurancePlan>, DbErr> {
        let entity = entity::prelude::InsurancePlan::find_by_id(id)
            .filter(entity::insurance_plan::Column::ClinicId.eq(clinic_id))
            .filter(entity::insurance_plan::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(InsurancePlan::from_entity))
    }

    /// Checks whether the clinic already has a plan named `name`, active or not.
    pub async fn name_taken(&self, clinic_id: i32, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::InsurancePlan::find()
            .filter(entity::insurance_plan::Column::ClinicId.eq(clinic_id))
            .filter(entity::insurance_plan::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Soft-deletes an active plan of the clinic. Returns whether a row changed.
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::InsurancePlan::update_many()
            .filter(entity::insurance_plan::Column::Id.eq(id))
            .filter(entity::insurance_plan::Column::ClinicId.eq(clinic_id))
            .filter(entity::insurance_plan::Column::Active.eq(true))
            .col_expr(
                entity::insurance_plan::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
