//! Per-clinic upstream credential factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating client credential rows.
pub struct ClientCredentialFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    service_type: String,
    api_key: Option<String>,
    instance_url: Option<String>,
    model: Option<String>,
    active: bool,
}

impl<'a> ClientCredentialFactory<'a> {
    /// Creates an active credential with no overrides set.
    pub fn new(
        db: &'a DatabaseConnection,
        clinic_id: i32,
        service_type: impl Into<String>,
    ) -> Self {
        Self {
            db,
            clinic_id,
            service_type: service_type.into(),
            api_key: None,
            instance_url: None,
            model: None,
            active: true,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn instance_url(mut self, instance_url: impl Into<String>) -> Self {
        self.instance_url = Some(instance_url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::client_credential::Model, DbErr> {
        entity::client_credential::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            service_type: ActiveValue::Set(self.service_type),
            api_key: ActiveValue::Set(self.api_key),
            instance_url: ActiveValue::Set(self.instance_url),
            model: ActiveValue::Set(self.model),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_client_credential(
    db: &DatabaseConnection,
    clinic_id: i32,
    service_type: &str,
) -> Result<entity::client_credential::Model, DbErr> {
    ClientCredentialFactory::new(db, clinic_id, service_type)
        .build()
        .await
}
