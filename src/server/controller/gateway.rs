//! Relay endpoints used by the WhatsApp bot and the workflow engine.
//!
//! Failures answer with the `{status: "error", message, details?}` envelope instead of
//! `{error}`. All routes require `X-Gateway-Key` when a key is configured.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gateway::{
            AnalyzeMessageDto, AnalyzeMessageResponseDto, GatewayMessageDto, GatewayStatusDto,
            InboundMessageDto, SendMessageDto,
        },
    },
    server::{
        error::AppError,
        middleware::gateway::GatewayGuard,
        service::gateway::{ai::AnalyzeRequest, whatsapp::OutboundMessage, GatewayService},
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping gateway endpoints in OpenAPI documentation
pub static GATEWAY_TAG: &str = "gateway";

/// Receive a chat message from the messaging client and forward it to the workflow engine.
///
/// # Returns
/// - `200 OK` - Plain text confirmation
/// - `400 Bad Request` - `data` missing
/// - `401 Unauthorized` - Missing or invalid gateway key
/// - Upstream status - Workflow engine rejected the message
#[utoipa::path(
    post,
    path = "/webhook/whatsapp",
    tag = GATEWAY_TAG,
    request_body = InboundMessageDto,
    responses(
        (status = 200, description = "Message forwarded", body = String),
        (status = 400, description = "Message data missing", body = GatewayMessageDto),
        (status = 401, description = "Missing or invalid gateway key", body = ErrorDto),
        (status = 500, description = "Workflow engine unreachable", body = GatewayMessageDto)
    ),
)]
pub async fn receive_whatsapp_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<InboundMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    GatewayGuard::new(&state.gateway, &headers).require()?;

    GatewayService::new(&state.db, &state.http_client, &state.gateway)
        .forward_inbound(payload.data)
        .await?;

    Ok((StatusCode::OK, "Message received and forwarded"))
}

/// Send a WhatsApp message through the messaging client.
///
/// # Returns
/// - `200 OK` - `{status: "success", message}`
/// - `400 Bad Request` - `client_id`, `to` or `message` missing
/// - `500 Internal Server Error` - Messaging client failed
#[utoipa::path(
    post,
    path = "/api/whatsapp/send-message",
    tag = GATEWAY_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent", body = GatewayMessageDto),
        (status = 400, description = "Required field missing", body = GatewayMessageDto),
        (status = 401, description = "Missing or invalid gateway key", body = ErrorDto),
        (status = 500, description = "Messaging client failed", body = GatewayMessageDto)
    ),
)]
pub async fn send_whatsapp_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    GatewayGuard::new(&state.gateway, &headers).require()?;

    let outbound = OutboundMessage::new(payload.client_id, payload.to, payload.message)?;
    GatewayService::new(&state.db, &state.http_client, &state.gateway)
        .send_message(outbound)
        .await?;

    Ok(Json(GatewayMessageDto {
        status: GatewayStatusDto::Success,
        message: "Message sent".to_string(),
        details: None,
    }))
}

/// Generate a reply with the configured AI provider.
///
/// # Returns
/// - `200 OK` - `{status: "success", response}`
/// - `400 Bad Request` - `client_id`, `message_text` or `system_prompt` missing
/// - `500 Internal Server Error` - Provider failed or is not configured
#[utoipa::path(
    post,
    path = "/api/ai/analyze-message",
    tag = GATEWAY_TAG,
    request_body = AnalyzeMessageDto,
    responses(
        (status = 200, description = "Generated reply", body = AnalyzeMessageResponseDto),
        (status = 400, description = "Required field missing", body = GatewayMessageDto),
        (status = 401, description = "Missing or invalid gateway key", body = ErrorDto),
        (status = 500, description = "AI provider failed", body = GatewayMessageDto)
    ),
)]
pub async fn analyze_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<AnalyzeMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    GatewayGuard::new(&state.gateway, &headers).require()?;

    let request = AnalyzeRequest::new(
        payload.client_id,
        payload.message_text,
        payload.system_prompt,
    )?;
    let response = GatewayService::new(&state.db, &state.http_client, &state.gateway)
        .analyze(request)
        .await?;

    Ok(Json(AnalyzeMessageResponseDto {
        status: GatewayStatusDto::Success,
        response,
    }))
}
