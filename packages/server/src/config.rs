use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Shared server secret presented as a bearer token on the
    /// register/unregister/login routes
    pub server_bearer_token: String,
    /// Base URL of the external project registry
    pub project_registry_url: String,
    /// Optional bearer token for the project registry
    pub project_registry_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            server_bearer_token: env::var("SERVER_BEARER_TOKEN")
                .context("SERVER_BEARER_TOKEN must be set")?,
            project_registry_url: env::var("PROJECT_REGISTRY_URL")
                .context("PROJECT_REGISTRY_URL must be set")?,
            project_registry_token: env::var("PROJECT_REGISTRY_TOKEN").ok(),
        })
    }
}
