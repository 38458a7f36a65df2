// src/lib.rs
// Popular Movies - movie detail screen core
//
// Architecture:
// - Domain-centric: movies, favorites, trailers and reviews live in `domain`
// - Explicit: the favorite flag only changes after the store confirms a write
// - Event-driven: services report what happened through the event bus
// - Application Layer: one actor per detail screen owns the view state

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_movie,
    DomainError,
    DomainResult,
    // Favorites
    FavoriteRecord,
    // Movie
    MovieRef,
    // Catalog entities
    Review,
    Trailer,
    DEFAULT_POSTER_SIZE,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CatalogFetchFailed,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteAdded,
    FavoriteRemoved,
    FavoriteToggleFailed,
    ReviewsFetched,
    TrailersFetched,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{FavoriteRepository, SqliteFavoriteRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{DetailDataOrchestrator, FavoriteChange, FavoriteStateController};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CatalogEndpoint, CatalogQuery, RemoteCatalog, TmdbCatalog};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState, DetailScreen, DetailScreenHandle, ErrorResponse, FetchOutcome, Presenter,
    ScrollOffset, SectionContent, ViewPhase, ViewSnapshot,
};

pub use config::AppConfig;
