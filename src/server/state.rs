//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds:
//! - Database connection pool
//! - HTTP client for the gateway relays
//! - Token and password services used by authentication
//! - Upstream gateway configuration

use sea_orm::DatabaseConnection;

use crate::server::{
    config::GatewayConfig,
    service::auth::{password::PasswordService, token::TokenService},
};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: `DatabaseConnection` is a pool, `reqwest::Client`
/// and the token keys are reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client used to reach the workflow engine, messaging client and AI provider.
    pub http_client: reqwest::Client,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Hashes and verifies login passwords.
    pub passwords: PasswordService,

    /// Upstream URLs, default clinic and shared key for the gateway routes.
    pub gateway: GatewayConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: TokenService,
        passwords: PasswordService,
        gateway: GatewayConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens,
            passwords,
            gateway,
        }
    }
}
