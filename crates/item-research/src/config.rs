use std::net::SocketAddr;

use research_common::anthropic::AnthropicClientConfig;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Service configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Model client settings. `None` when no API key is configured, which puts the
    /// service in demo mode.
    pub anthropic: Option<AnthropicClientConfig>,
}

impl Config {
    /// Optional:
    /// - `BIND_ADDR`: listen address (default `127.0.0.1:3000`)
    /// - `ANTHROPIC_API_KEY`: model credential; omit to serve demo data
    /// - `ANTHROPIC_BASE_URL`, `ANTHROPIC_MODEL`, `ANTHROPIC_MAX_TOKENS`,
    ///   `ANTHROPIC_TIMEOUT_SECS`, `ANTHROPIC_MAX_ERROR_BODY_BYTES`: client tuning
    pub fn from_env() -> Result<Self, AppError> {
        let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            bind_addr: parse_bind_addr(&raw)?,
            anthropic: AnthropicClientConfig::from_env(),
        })
    }

    pub fn demo_mode(&self) -> bool {
        self.anthropic.is_none()
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, AppError> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|e| AppError::Config(format!("invalid BIND_ADDR '{raw}': {e}")))
}
