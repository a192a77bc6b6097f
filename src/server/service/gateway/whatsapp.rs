use serde_json::json;

use crate::server::{
    error::{gateway::GatewayError, AppError},
    service::gateway::{present, GatewayService, MESSAGING_CLIENT_SERVICE},
};

/// Validated outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub clinic_id: i32,
    pub to: String,
    pub message: String,
}

impl OutboundMessage {
    /// Builds an outbound message, rejecting missing or blank fields.
    pub fn new(
        clinic_id: Option<i32>,
        to: Option<String>,
        message: Option<String>,
    ) -> Result<Self, GatewayError> {
        match (clinic_id, present(to), present(message)) {
            (Some(clinic_id), Some(to), Some(message)) => Ok(Self {
                clinic_id,
                to,
                message,
            }),
            _ => Err(GatewayError::InvalidPayload(
                "Fields 'client_id', 'to' and 'message' are required".to_string(),
            )),
        }
    }
}

impl<'a> GatewayService<'a> {
    /// Forwards an inbound chat message to the workflow engine.
    ///
    /// The message is wrapped as `{client_id, message}` using the configured gateway
    /// clinic.
    ///
    /// # Returns
    /// - `Ok(())` - Workflow engine accepted the message
    /// - `Err(GatewayError::InvalidPayload)` - No message data in the request
    /// - `Err(GatewayError::WorkflowRejected)` - Workflow engine answered non-2xx
    /// - `Err(GatewayError::Request)` - Workflow engine unreachable
    pub async fn forward_inbound(&self, data: Option<serde_json::Value>) -> Result<(), AppError> {
        let data = data
            .filter(|d| !d.is_null())
            .ok_or_else(|| GatewayError::InvalidPayload("Missing message data".to_string()))?;

        let payload = json!({
            "client_id": self.config.clinic_id,
            "message": data,
        });

        let response = self
            .http
            .post(&self.config.workflow_webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::WorkflowRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!(
            "Forwarded inbound message for clinic {} to workflow engine",
            self.config.clinic_id
        );

        Ok(())
    }

    /// Delivers a message through the messaging client.
    ///
    /// Uses the clinic's `MESSAGING_CLIENT` credential URL when one is active.
    ///
    /// # Returns
    /// - `Ok(())` - Messaging client accepted the message
    /// - `Err(GatewayError::MessagingRejected)` - Messaging client answered non-2xx
    /// - `Err(GatewayError::Request)` - Messaging client unreachable
    /// - `Err(AppError::DbErr)` - Credential lookup failed
    pub async fn send_message(&self, outbound: OutboundMessage) -> Result<(), AppError> {
        let url = self
            .credential(outbound.clinic_id, MESSAGING_CLIENT_SERVICE)
            .await?
            .and_then(|c| present(c.instance_url))
            .unwrap_or_else(|| self.config.messaging_client_url.clone());

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "to": outbound.to,
                "message": outbound.message,
            }))
            .send()
            .await
            .map_err(GatewayError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::MessagingRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!("Sent message for clinic {}", outbound.clinic_id);

        Ok(())
    }
}
