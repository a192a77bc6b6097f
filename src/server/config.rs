use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24 * 7;
const DEFAULT_PASSWORD_HASH_ROUNDS: u32 = 600_000;

const DEFAULT_WORKFLOW_WEBHOOK_URL: &str = "http://localhost:5678/workflow/whatsapp-webhook";
const DEFAULT_MESSAGING_CLIENT_URL: &str = "http://localhost:3001";
const DEFAULT_GATEWAY_CLINIC_ID: i32 = 1;

const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "llama3";
const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub password_hash_rounds: u32,

    pub gateway: GatewayConfig,
}

/// Upstream endpoints and credentials used by the bot relays.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Workflow engine webhook receiving inbound chat messages.
    pub workflow_webhook_url: String,
    /// Messaging client endpoint accepting `{to, message}`.
    pub messaging_client_url: String,
    /// Clinic attached to inbound messages as `client_id`.
    pub clinic_id: i32,
    /// Shared secret expected in `X-Gateway-Key`; the check is skipped when unset.
    pub api_key: Option<String>,
    pub ai: AiConfig,
}

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub ollama_url: String,
    pub ollama_model: String,
    pub openai_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiProvider {
    Ollama,
    OpenAi,
}

impl AiProvider {
    /// `service_type` of the per-clinic credential overriding this provider.
    pub fn credential_service_type(&self) -> &'static str {
        match self {
            Self::Ollama => "OLLAMA_API",
            Self::OpenAi => "OPENAI_API",
        }
    }
}

impl FromStr for AiProvider {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            _ => Err(()),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parsed("PORT", DEFAULT_PORT)?,
            jwt_secret: required("JWT_SECRET")?,
            token_ttl_hours: parsed("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?,
            password_hash_rounds: parsed("PASSWORD_HASH_ROUNDS", DEFAULT_PASSWORD_HASH_ROUNDS)?,
            gateway: GatewayConfig {
                workflow_webhook_url: or_default(
                    "WORKFLOW_WEBHOOK_URL",
                    DEFAULT_WORKFLOW_WEBHOOK_URL,
                ),
                messaging_client_url: or_default(
                    "MESSAGING_CLIENT_URL",
                    DEFAULT_MESSAGING_CLIENT_URL,
                ),
                clinic_id: parsed("GATEWAY_CLINIC_ID", DEFAULT_GATEWAY_CLINIC_ID)?,
                api_key: optional("GATEWAY_API_KEY"),
                ai: AiConfig {
                    provider: parsed("AI_PROVIDER", AiProvider::Ollama)?,
                    ollama_url: or_default("OLLAMA_API_URL", DEFAULT_OLLAMA_API_URL),
                    ollama_model: or_default("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
                    openai_url: or_default("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
                    openai_api_key: optional("OPENAI_API_KEY"),
                    openai_model: or_default("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                },
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn or_default(name: &str, default: &str) -> String {
    optional(name).unwrap_or_else(|| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
