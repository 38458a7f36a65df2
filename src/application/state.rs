// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{CatalogEndpoint, RemoteCatalog, TmdbCatalog};
use crate::repositories::{FavoriteRepository, SqliteFavoriteRepository};
use crate::services::{DetailDataOrchestrator, FavoriteStateController};

/// Shared services handed to every detail screen.
/// All fields are Arc-wrapped; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub favorites: Arc<FavoriteStateController>,
    pub orchestrator: Arc<DetailDataOrchestrator>,
}

impl AppState {
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        catalog: Arc<dyn RemoteCatalog>,
        endpoint: CatalogEndpoint,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let favorites = Arc::new(FavoriteStateController::new(favorite_repo, event_bus.clone()));
        let orchestrator = Arc::new(DetailDataOrchestrator::new(catalog, endpoint, event_bus.clone()));

        Self {
            event_bus,
            favorites,
            orchestrator,
        }
    }

    /// Opens the database and the TMDB client described by `config`
    pub fn initialize(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        let db_path = config.database.resolved_path()?;
        let pool = Arc::new(create_connection_pool(&db_path, config.database.max_connections)?);
        let stats = {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
            get_database_stats(&conn)?
        };

        let favorite_repo: Arc<dyn FavoriteRepository> = Arc::new(SqliteFavoriteRepository::new(pool));
        let catalog: Arc<dyn RemoteCatalog> = Arc::new(TmdbCatalog::new(config.catalog.timeout())?);
        let endpoint = CatalogEndpoint::new(&config.catalog.base_url, &config.catalog.api_key);

        log::info!(
            "Favorites database at {} ({} favorites, {} bytes)",
            db_path.display(),
            stats.favorite_count,
            stats.size_bytes
        );

        Ok(Self::new(favorite_repo, catalog, endpoint, Arc::new(EventBus::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_initialize_rejects_missing_api_key() {
        let result = AppState::initialize(&AppConfig::default());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_initialize_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.catalog.api_key = "k3y".to_string();
        config.database.path = Some(dir.path().join("favorites.db"));

        assert!(AppState::initialize(&config).is_ok());
        assert!(dir.path().join("favorites.db").exists());
    }
}
