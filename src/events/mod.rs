// src/events/mod.rs
//
// Internal Event System - Public API
//
// Handlers are type-erased inside the bus and never exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Catalog
    CatalogFetchFailed,
    // Favorites
    FavoriteAdded,
    FavoriteRemoved,
    FavoriteToggleFailed,
    ReviewsFetched,
    TrailersFetched,
};

pub use bus::{EventBus, EventLogEntry};
pub use bus::event_bus::DEFAULT_LOG_CAPACITY;

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
