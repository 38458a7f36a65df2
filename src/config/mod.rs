// src/config/mod.rs
//
// Application configuration
//
// Sources, later wins:
// 1. Built-in defaults
// 2. Optional JSON file
// 3. POPULAR_MOVIES_* environment variables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::default_database_path;
use crate::error::{AppError, AppResult};

pub const ENV_API_KEY: &str = "POPULAR_MOVIES_API_KEY";
pub const ENV_API_BASE: &str = "POPULAR_MOVIES_API_BASE";
pub const ENV_DB_PATH: &str = "POPULAR_MOVIES_DB";
pub const ENV_LOG_LEVEL: &str = "POPULAR_MOVIES_LOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit database file; the platform data dir is used when unset
    pub path: Option<PathBuf>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: 4,
        }
    }
}

impl DatabaseConfig {
    pub fn resolved_path(&self) -> AppResult<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }
}

/// Bounds for the worker pool that runs store and network I/O
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub worker_threads: usize,
    pub max_blocking_threads: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            worker_threads: 2,
            max_blocking_threads: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub database: DatabaseConfig,
    pub workers: WorkerConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            database: DatabaseConfig::default(),
            workers: WorkerConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the JSON file at `path` (if any), then environment
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Applies environment-style overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.catalog.api_key = key;
        }
        if let Some(base) = lookup(ENV_API_BASE) {
            self.catalog.base_url = base;
        }
        if let Some(db) = lookup(ENV_DB_PATH) {
            self.database.path = Some(PathBuf::from(db));
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(AppError::Config("Catalog base URL is empty".to_string()));
        }
        if self.catalog.api_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "No catalog API key; set {} or catalog.api_key",
                ENV_API_KEY
            )));
        }
        if self.workers.max_blocking_threads == 0 || self.workers.worker_threads == 0 {
            return Err(AppError::Config("Worker pool sizes must be at least 1".to_string()));
        }
        Ok(())
    }
}
