use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Startup configuration. Read once in `main` and handed to the parts that
/// need it; request handlers never touch the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name → value lookup. Missing optional
    /// values take defaults; malformed values are startup errors.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid BIND_ADDR {raw:?}"))?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid MAX_UPLOAD_BYTES {raw:?}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            api_key,
            model,
            bind_addr,
            max_upload_bytes,
        })
    }
}
