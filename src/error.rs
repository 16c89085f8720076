// src/error.rs

//! Unified error handling for the docs scraper.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection could not be established, or the request timed out
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Seed configuration missing or malformed
    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// Seed entry without a URL
    #[error("Seed '{seed_id}' in domain {domain_id} has no URL")]
    MalformedSeed { domain_id: String, seed_id: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a transport error for a URL.
    pub fn transport(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create an HTTP status error for a URL.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a config read error for a file path.
    pub fn config_read(path: &Path, message: impl fmt::Display) -> Self {
        Self::ConfigRead {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a malformed seed error.
    pub fn malformed_seed(domain_id: impl fmt::Display, seed_id: impl fmt::Display) -> Self {
        Self::MalformedSeed {
            domain_id: domain_id.to_string(),
            seed_id: seed_id.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came from the network fetch.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }
}
