use axum::http::HeaderMap;

use crate::server::{config::GatewayConfig, error::auth::AuthError};

/// Header carrying the shared gateway secret.
pub const GATEWAY_KEY_HEADER: &str = "x-gateway-key";

pub struct GatewayGuard<'a> {
    config: &'a GatewayConfig,
    headers: &'a HeaderMap,
}

impl<'a> GatewayGuard<'a> {
    pub fn new(config: &'a GatewayConfig, headers: &'a HeaderMap) -> Self {
        Self { config, headers }
    }

    /// Checks `X-Gateway-Key` against the configured key.
    ///
    /// Passes every request when no key is configured.
    pub fn require(&self) -> Result<(), AuthError> {
        let Some(expected) = self.config.api_key.as_deref() else {
            return Ok(());
        };

        let presented = self
            .headers
            .get(GATEWAY_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match presented {
            Some(key) if key == expected => Ok(()),
            _ => Err(AuthError::InvalidGatewayKey),
        }
    }
}
