use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::gateway::{GatewayMessageDto, GatewayStatusDto};

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request body lacked a required field.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    InvalidPayload(String),

    /// Workflow engine answered with a non-success status.
    ///
    /// The status is passed through to the caller together with the upstream body.
    #[error("Workflow engine responded with status {status}")]
    WorkflowRejected { status: u16, body: String },

    /// Messaging client answered with a non-success status.
    ///
    /// Results in 500 Internal Server Error with the upstream body as details.
    #[error("Messaging client responded with status {status}")]
    MessagingRejected { status: u16, body: String },

    /// AI provider answered with a non-success status or an unexpected body.
    ///
    /// Results in 500 Internal Server Error.
    #[error("AI provider error: {0}")]
    AiProvider(String),

    /// Selected AI provider lacks a required setting, such as the OpenAI key.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Gateway not configured: {0}")]
    NotConfigured(String),

    /// Upstream could not be reached or the response could not be read.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts gateway errors into the `{status: "error", message, details?}` envelope.
///
/// # Returns
/// - 400 Bad Request - For `InvalidPayload`
/// - Upstream status - For `WorkflowRejected`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            Self::InvalidPayload(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::WorkflowRejected { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Workflow engine rejected the message".to_string(),
                Some(body),
            ),
            Self::MessagingRejected { status, body } => {
                tracing::warn!("Messaging client responded with status {}: {}", status, body);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send message".to_string(),
                    Some(body),
                )
            }
            err @ (Self::AiProvider(_) | Self::NotConfigured(_)) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process message with AI".to_string(),
                    None,
                )
            }
            Self::Request(err) => {
                tracing::error!("Gateway request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(GatewayMessageDto {
                status: GatewayStatusDto::Error,
                message,
                details,
            }),
        )
            .into_response()
    }
}
