use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Built once in `main` and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API credential. Optional at startup: its absence is logged as
    /// a warning and generation requests fail when attempted.
    pub gemini_api_key: Option<String>,
    /// The single frontend origin permitted by the CORS layer.
    pub allowed_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "netprep_api=info,tower_http=info".to_string()),
        })
    }
}
