//! Application configuration loaded from environment variables.

use std::env;

/// Default Strava API base URL.
const DEFAULT_STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";

/// Default trailing-window page size requested from Strava.
const DEFAULT_PAGE_SIZE: u32 = 200;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Strava API base URL, overridable for local mocks
    pub strava_api_base: String,
    /// Activities requested per trailing-window fetch
    pub activity_page_size: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            strava_api_base: DEFAULT_STRAVA_API_BASE.to_string(),
            activity_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            strava_api_base: env::var("STRAVA_API_BASE")
                .unwrap_or_else(|_| DEFAULT_STRAVA_API_BASE.to_string()),
            activity_page_size: match env::var("ACTIVITY_PAGE_SIZE") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("ACTIVITY_PAGE_SIZE"))?,
                Err(_) => DEFAULT_PAGE_SIZE,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
