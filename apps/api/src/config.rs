use anyhow::{Context, Result};

/// Fixed settle delay applied after a confirmed stage move, unless
/// overridden via `SETTLE_DELAY_MS`.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub ats_base_url: String,
    pub ats_api_token: String,
    pub port: u16,
    /// How long a confirmed move keeps its optimistic entry before the
    /// tracker clears it.
    pub settle_delay_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ats_base_url: require_env("ATS_BASE_URL")?,
            ats_api_token: require_env("ATS_API_TOKEN")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS")
                .unwrap_or_else(|_| DEFAULT_SETTLE_DELAY_MS.to_string())
                .parse::<u64>()
                .context("SETTLE_DELAY_MS must be a non-negative integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
