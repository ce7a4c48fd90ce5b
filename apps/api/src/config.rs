use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Production billing endpoint used when `CREDIT_SERVICE_URL` is not set.
const DEFAULT_CREDIT_SERVICE_URL: &str =
    "https://s3fgwxrjsh.execute-api.eu-central-1.amazonaws.com/production/api/v1/user/credits";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub credit_service_url: String,
    pub credit_timeout: Duration,
    pub completion_timeout: Duration,
    /// Base delay of the completion client's exponential backoff.
    pub completion_backoff: Duration,
    /// Largest contract upload accepted, in bytes.
    pub max_contract_bytes: usize,
    /// When false, `/generate_markdown` returns the raw audit report without
    /// the second formatting pass.
    pub report_formatting: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            credit_service_url: env_or("CREDIT_SERVICE_URL", DEFAULT_CREDIT_SERVICE_URL),
            credit_timeout: Duration::from_secs(parse_env("CREDIT_TIMEOUT_SECS", 30)?),
            completion_timeout: Duration::from_secs(parse_env("COMPLETION_TIMEOUT_SECS", 60)?),
            completion_backoff: Duration::from_millis(parse_env("COMPLETION_BACKOFF_MS", 1000)?),
            max_contract_bytes: parse_env("MAX_CONTRACT_BYTES", 256 * 1024)?,
            report_formatting: parse_env("REPORT_FORMATTING", true)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
