use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::credential::ClientCredential;

/// Per-clinic gateway credentials.
pub struct CredentialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredentialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active credential of a clinic for a service such as `OPENAI_API`.
    ///
    /// # Returns
    /// - `Ok(Some(ClientCredential))` - Active credential configured
    /// - `Ok(None)` - No active credential, the global configuration applies
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(
        &self,
        clinic_id: i32,
        service_type: &str,
    ) -> Result<Option<ClientCredential>, DbErr> {
        let entity = entity::prelude::ClientCredential::find()
            .filter(entity::client_credential::Column::ClinicId.eq(clinic_id))
            .filter(entity::client_credential::Column::ServiceType.eq(service_type))
            .filter(entity::client_credential::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(ClientCredential::from_entity))
    }
}
