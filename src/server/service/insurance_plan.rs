//! Insurance plan service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::insurance_plan::InsurancePlanRepository,
    error::AppError,
    model::insurance_plan::{CreateInsurancePlanParams, InsurancePlan},
};

pub struct InsurancePlanService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> InsurancePlanService<'a> {
    /// Creates a new InsurancePlanService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InsurancePlanService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an insurance plan accepted by the clinic.
    ///
    /// # Returns
    /// - `Ok(InsurancePlan)` - The created plan
    /// - `Err(AppError::BadRequest)` - Name already registered in the clinic
    pub async fn create(&self, params: CreateInsurancePlanParams) -> Result<InsurancePlan, AppError> {
        let repo = InsurancePlanRepository::new(self.db);

        if repo.name_taken(params.clinic_id, &params.name).await? {
            return Err(AppError::BadRequest(
                "Insurance plan already registered".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn list(&self, clinic_id: i32) -> Result<Vec<InsurancePlan>, AppError> {
        Ok(InsurancePlanRepository::new(self.db)
            .get_active(clinic_id)
            .await?)
    }

    /// Soft-deletes a plan. Appointments already billed to it keep the reference.
    ///
    /// # Returns
    /// - `Ok(())` - Plan deactivated
    /// - `Err(AppError::NotFound)` - Missing, already inactive or owned by another clinic
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<(), AppError> {
        if !InsurancePlanRepository::new(self.db)
            .deactivate(clinic_id, id)
            .await?
        {
            return Err(AppError::NotFound("Insurance plan not found".to_string()));
        }

        Ok(())
    }
}
