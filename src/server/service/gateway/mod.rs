//! HTTP relays between the WhatsApp bot, the workflow engine and the AI provider.
//!
//! - `whatsapp` - Inbound message forwarding and outbound message delivery
//! - `ai` - Text generation through Ollama or an OpenAI-compatible API
//!
//! Per-clinic `client_credential` rows override the configured upstream URL, key or
//! model for a single clinic.

pub mod ai;
pub mod whatsapp;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::GatewayConfig, data::credential::CredentialRepository, error::AppError,
    model::credential::ClientCredential,
};

/// `service_type` of the credential overriding the messaging client URL.
pub const MESSAGING_CLIENT_SERVICE: &str = "MESSAGING_CLIENT";

pub struct GatewayService<'a> {
    pub db: &'a DatabaseConnection,
    http: &'a reqwest::Client,
    config: &'a GatewayConfig,
}

impl<'a> GatewayService<'a> {
    /// Creates a new GatewayService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection, used for credential lookups
    /// - `http` - Shared HTTP client
    /// - `config` - Upstream URLs and defaults
    ///
    /// # Returns
    /// - `GatewayService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http: &'a reqwest::Client,
        config: &'a GatewayConfig,
    ) -> Self {
        Self { db, http, config }
    }

    async fn credential(
        &self,
        clinic_id: i32,
        service_type: &str,
    ) -> Result<Option<ClientCredential>, AppError> {
        Ok(CredentialRepository::new(self.db)
            .find_active(clinic_id, service_type)
            .await?)
    }
}

/// Treats a missing or blank field as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
