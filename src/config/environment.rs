//! Environment configuration.
//!
//! A single base-URL value supplied externally at deploy time, a fixed
//! request timeout, and the log level. Loaded once at startup and injected
//! into the services.

use log::LevelFilter;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_API_URL: &str = "GEOPORTFOLIO_API_URL";
const ENV_LOG_LEVEL: &str = "GEOPORTFOLIO_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct Environment {
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
}

impl Environment {
    /// Load configuration from the process environment (and a `.env` file if
    /// present), falling back to the hardcoded defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var(ENV_API_URL).ok(), env::var(ENV_LOG_LEVEL).ok())
    }

    fn from_vars(api_url: Option<String>, log_level: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let log_level = log_level
            .as_deref()
            .map(parse_log_level)
            .unwrap_or(LevelFilter::Info);

        Self {
            api_url,
            request_timeout: REQUEST_TIMEOUT,
            log_level,
        }
    }
}

fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
