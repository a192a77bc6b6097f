use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every failing endpoint outside the gateways.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation or "no data" message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
