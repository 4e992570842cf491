use anyhow::{Context, Result};

/// Dashboard configuration loaded from environment variables.
///
/// The API base URL is explicit configuration rather than a module-level
/// constant so deployments can point the pages at any backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://api:4000/student".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
