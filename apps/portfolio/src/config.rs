use anyhow::{Context, Result};

/// Default Formspree form that relays contact messages to the site owner's inbox.
pub const DEFAULT_FORM_RELAY_URL: &str = "https://formspree.io/f/mqaprnqz";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment starts a working site.
#[derive(Debug, Clone)]
pub struct Config {
    pub form_relay_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            form_relay_url: std::env::var("FORM_RELAY_URL")
                .unwrap_or_else(|_| DEFAULT_FORM_RELAY_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
