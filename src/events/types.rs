// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;

    /// Movie the fact is about
    fn movie_id(&self) -> i64;
}

// ============================================================================
// FAVORITE EVENTS
// ============================================================================

/// Emitted after a favorite row has been written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub title: String,
}

impl FavoriteAdded {
    pub fn new(movie_id: i64, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
        }
    }
}

impl DomainEvent for FavoriteAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteAdded" }
    fn movie_id(&self) -> i64 { self.movie_id }
}

/// Emitted after a favorite row has been deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
}

impl FavoriteRemoved {
    pub fn new(movie_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
        }
    }
}

impl DomainEvent for FavoriteRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteRemoved" }
    fn movie_id(&self) -> i64 { self.movie_id }
}

/// Emitted when a toggle write did not complete; the store is unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub intended_favorite: bool,
    pub reason: String,
}

impl FavoriteToggleFailed {
    pub fn new(movie_id: i64, intended_favorite: bool, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            intended_favorite,
            reason,
        }
    }
}

impl DomainEvent for FavoriteToggleFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteToggleFailed" }
    fn movie_id(&self) -> i64 { self.movie_id }
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailersFetched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub count: usize,
}

impl TrailersFetched {
    pub fn new(movie_id: i64, count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            count,
        }
    }
}

impl DomainEvent for TrailersFetched {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TrailersFetched" }
    fn movie_id(&self) -> i64 { self.movie_id }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsFetched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub count: usize,
}

impl ReviewsFetched {
    pub fn new(movie_id: i64, count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            count,
        }
    }
}

impl DomainEvent for ReviewsFetched {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReviewsFetched" }
    fn movie_id(&self) -> i64 { self.movie_id }
}

/// Emitted when a trailer or review fetch failed at the network or parse step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub query: String, // "videos" | "reviews"
    pub reason: String,
}

impl CatalogFetchFailed {
    pub fn new(movie_id: i64, query: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            query,
            reason,
        }
    }
}

impl DomainEvent for CatalogFetchFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogFetchFailed" }
    fn movie_id(&self) -> i64 { self.movie_id }
}
