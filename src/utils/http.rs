// src/utils/http.rs

//! HTTP fetching.
//!
//! One blocking GET per page. Transport failures and non-success statuses
//! are surfaced to the caller as-is; there are no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Source of raw page markup.
pub trait PageFetcher {
    /// Fetch the body of `url` as text.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &ScraperConfig) -> Result<Client> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))
}

/// `PageFetcher` backed by a reqwest blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher from the scraper settings.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(url, status.as_u16()));
        }

        response.text().map_err(|e| AppError::transport(url, e))
    }
}
