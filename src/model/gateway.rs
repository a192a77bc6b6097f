use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound chat message posted by the messaging client.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct InboundMessageDto {
    /// Raw message object, forwarded untouched.
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
}

/// Body of `POST /api/whatsapp/send-message`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct SendMessageDto {
    pub client_id: Option<i32>,
    pub to: Option<String>,
    pub message: Option<String>,
}

/// Body of `POST /api/ai/analyze-message`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct AnalyzeMessageDto {
    pub client_id: Option<i32>,
    pub message_text: Option<String>,
    pub system_prompt: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatusDto {
    Success,
    Error,
}

/// Body of the outbound message relay and of every gateway failure.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GatewayMessageDto {
    pub status: GatewayStatusDto,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Success body of the AI relay.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnalyzeMessageResponseDto {
    pub status: GatewayStatusDto,
    pub response: String,
}
