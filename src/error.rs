//! Unified error type system for the GeoPortfolio desktop application.
//!
//! Centralized error handling, replacing scattered String-based error
//! returns with a typed `AppError` enum. Each variant represents a specific
//! failure scenario; conversions from common error types keep call sites on
//! `?`, and the String conversion serves Tauri command return values.

use std::fmt;

/// Unified application error type.
///
/// `Network` covers transport failures (connection refused, timeout) and
/// non-2xx responses; `Decode` covers payloads that do not conform to the
/// expected shape. Both propagate unchanged to the presentation layer, which
/// renders the retry affordance — this core does no retries.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Transport failure or unexpected HTTP status
    Network(String),

    /// Response body does not parse into the expected record shape
    Decode(String),

    /// Authentication failures (rejected login, missing/expired token)
    Auth(String),

    /// Validation errors (invalid input, constraint violations)
    Validation(String),

    /// Configuration errors (loading, parsing)
    Config(String),

    /// Generic/internal errors that don't fit other categories
    Internal(String),
}

impl AppError {
    /// Create a network error with a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a decode error with a message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an auth error with a message.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a validation error with a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a config error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error message as a string slice.
    pub fn message(&self) -> &str {
        match self {
            AppError::Network(msg) => msg,
            AppError::Decode(msg) => msg,
            AppError::Auth(msg) => msg,
            AppError::Validation(msg) => msg,
            AppError::Config(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Auth(msg) => write!(f, "Auth error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Convert from `reqwest::Error` to `AppError`.
///
/// Body-shape mismatches become `Decode`; everything else on the transport
/// path (timeouts, connection failures, non-2xx statuses raised via
/// `error_for_status`) becomes `Network`.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::decode(err.to_string())
        } else if err.is_timeout() {
            AppError::network("request timed out")
        } else if let Some(status) = err.status() {
            AppError::network(format!("unexpected HTTP status: {}", status))
        } else {
            AppError::network(err.to_string())
        }
    }
}

/// Convert from `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(format!("JSON error: {}", err))
    }
}

/// Convert from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert from `AppError` to `String`.
///
/// This implementation is used for Tauri command return values,
/// which require errors to be String type.
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

/// Type alias for Result with AppError.
pub type Result<T> = std::result::Result<T, AppError>;
