use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    /// Only needed when `enable_llm_analysis` is on.
    pub anthropic_api_key: Option<String>,
    pub enable_llm_analysis: bool,
    /// Max analyses per client per window.
    pub analysis_rate_limit: u64,
    pub analysis_rate_window_secs: u64,
    /// Max contact-form submissions per client per window.
    pub contact_rate_limit: u64,
    pub contact_rate_window_secs: u64,
    /// Key rate limits on `X-Forwarded-For`. Only safe behind a proxy that
    /// overwrites the header.
    pub trust_proxy: bool,
    /// Enables the contact listing when set; callers send it as `X-Admin-Token`.
    pub admin_api_token: Option<String>,
    pub max_upload_bytes: usize,
    pub seed_companies: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            enable_llm_analysis: env_flag("ENABLE_LLM_ANALYSIS")?,
            analysis_rate_limit: env_or("ANALYSIS_RATE_LIMIT", "10")
                .parse::<u64>()
                .context("ANALYSIS_RATE_LIMIT must be a non-negative integer")?,
            analysis_rate_window_secs: env_or("ANALYSIS_RATE_WINDOW_SECS", "3600")
                .parse::<u64>()
                .context("ANALYSIS_RATE_WINDOW_SECS must be a non-negative integer")?,
            contact_rate_limit: env_or("CONTACT_RATE_LIMIT", "5")
                .parse::<u64>()
                .context("CONTACT_RATE_LIMIT must be a non-negative integer")?,
            contact_rate_window_secs: env_or("CONTACT_RATE_WINDOW_SECS", "3600")
                .parse::<u64>()
                .context("CONTACT_RATE_WINDOW_SECS must be a non-negative integer")?,
            trust_proxy: env_flag("TRUST_PROXY")?,
            admin_api_token: std::env::var("ADMIN_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "5242880")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            seed_companies: env_flag("SEED_COMPANIES")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// LLM analysis needs both the flag and a key.
    pub fn llm_analysis_enabled(&self) -> bool {
        self.enable_llm_analysis && self.anthropic_api_key.is_some()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).with_context(|| format!("{key} must be a boolean, got '{raw}'")),
        Err(_) => Ok(false),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
