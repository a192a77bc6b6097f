//! Procedure catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::procedure::ProcedureRepository,
    error::AppError,
    model::procedure::{CreateProcedureParams, Procedure, UpdateProcedureParams},
};

pub struct ProcedureService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProcedureService<'a> {
    /// Creates a new ProcedureService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProcedureService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a procedure to the clinic's catalog.
    ///
    /// Names are unique per clinic across active and deactivated procedures.
    ///
    /// # Returns
    /// - `Ok(Procedure)` - The created procedure
    /// - `Err(AppError::BadRequest)` - Name already used in the clinic
    pub async fn create(&self, params: CreateProcedureParams) -> Result<Procedure, AppError> {
        let repo = ProcedureRepository::new(self.db);

        if repo
            .name_taken(params.clinic_id, &params.fields.name, None)
            .await?
        {
            return Err(name_taken());
        }

        Ok(repo.create(params).await?)
    }

    pub async fn list(&self, clinic_id: i32) -> Result<Vec<Procedure>, AppError> {
        Ok(ProcedureRepository::new(self.db).get_active(clinic_id).await?)
    }

    /// # Returns
    /// - `Ok(Procedure)` - Active procedure of the clinic
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    pub async fn get(&self, clinic_id: i32, id: i32) -> Result<Procedure, AppError> {
        ProcedureRepository::new(self.db)
            .find_active(clinic_id, id)
            .await?
            .ok_or_else(procedure_not_found)
    }

    /// Replaces the fields of an active procedure.
    ///
    /// # Returns
    /// - `Ok(Procedure)` - The updated procedure
    /// - `Err(AppError::NotFound)` - Missing, inactive or owned by another clinic
    /// - `Err(AppError::BadRequest)` - New name used by another procedure of the clinic
    pub async fn update(&self, params: UpdateProcedureParams) -> Result<Procedure, AppError> {
        let repo = ProcedureRepository::new(self.db);

        repo.find_active(params.clinic_id, params.id)
            .await?
            .ok_or_else(procedure_not_found)?;

        if repo
            .name_taken(params.clinic_id, &params.fields.name, Some(params.id))
            .await?
        {
            return Err(name_taken());
        }

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a procedure. Existing appointment links are kept.
    ///
    /// # Returns
    /// - `Ok(())` - Procedure deactivated
    /// - `Err(AppError::NotFound)` - Missing, already inactive or owned by another clinic
    pub async fn deactivate(&self, clinic_id: i32, id: i32) -> Result<(), AppError> {
        if !ProcedureRepository::new(self.db)
            .deactivate(clinic_id, id)
            .await?
        {
            return Err(procedure_not_found());
        }

        Ok(())
    }
}

fn procedure_not_found() -> AppError {
    AppError::NotFound("Procedure not found".to_string())
}

fn name_taken() -> AppError {
    AppError::BadRequest("A procedure with this name already exists".to_string())
}
