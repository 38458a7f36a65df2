// src/integrations/tmdb/client.rs
//
// TMDB HTTP client
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Returns raw bodies; parsing lives in `parser`
// - Any transport or status failure is a Network error

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::catalog::RemoteCatalog;

/// RemoteCatalog backed by the TMDB REST API
pub struct TmdbCatalog {
    http_client: Client,
}

impl TmdbCatalog {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl RemoteCatalog for TmdbCatalog {
    async fn get(&self, url: &str) -> AppResult<String> {
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("TMDB request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("TMDB returned status: {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read TMDB response: {}", e.without_url())))
    }
}
