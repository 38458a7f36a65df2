// src/integrations/catalog.rs
//
// Remote movie catalog seam.
//
// The orchestrator only ever sees this trait: it hands over a fully built
// URL and gets the raw body back.

use async_trait::async_trait;

use crate::error::AppResult;

/// Raw access to the remote catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Performs one GET and returns the response body
    async fn get(&self, url: &str) -> AppResult<String>;
}

/// Which per-movie listing to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogQuery {
    Videos,
    Reviews,
}

impl CatalogQuery {
    pub fn path_segment(&self) -> &'static str {
        match self {
            CatalogQuery::Videos => "videos",
            CatalogQuery::Reviews => "reviews",
        }
    }
}

impl std::fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Builds `{base}/movie/{id}/{videos|reviews}?api_key={key}`
#[derive(Debug, Clone)]
pub struct CatalogEndpoint {
    base_url: String,
    api_key: String,
}

impl CatalogEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, movie_id: i64, query: CatalogQuery) -> String {
        format!(
            "{}/movie/{}/{}?api_key={}",
            self.base_url,
            movie_id,
            query.path_segment(),
            self.api_key
        )
    }

    /// Same URL with the key masked, safe for logs
    pub fn redacted_url_for(&self, movie_id: i64, query: CatalogQuery) -> String {
        format!(
            "{}/movie/{}/{}?api_key=***",
            self.base_url,
            movie_id,
            query.path_segment()
        )
    }
}
