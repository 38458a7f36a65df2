// src/services/favorite_controller.rs
//
// Favorite state reconciliation against the persistent store.
//
// RULES:
// - Every store call runs on the blocking worker pool
// - Reads and writes for the same movie id are serialized
// - The new flag is only reported after the write succeeded

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex as AsyncMutex;

use crate::domain::{validate_movie, FavoriteRecord, MovieRef};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FavoriteAdded, FavoriteRemoved, FavoriteToggleFailed};
use crate::repositories::FavoriteRepository;

/// Outcome of a confirmed toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteChange {
    Added,
    Removed,
}

impl FavoriteChange {
    /// Flag value after the change
    pub fn is_favorite(&self) -> bool {
        matches!(self, FavoriteChange::Added)
    }

    /// User-visible confirmation text
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteChange::Added => "Added to favorites",
            FavoriteChange::Removed => "Removed from favorites",
        }
    }
}

pub struct FavoriteStateController {
    repo: Arc<dyn FavoriteRepository>,
    event_bus: Arc<EventBus>,
    id_locks: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl FavoriteStateController {
    pub fn new(repo: Arc<dyn FavoriteRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repo,
            event_bus,
            id_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Per-id serialization lock. Entries nobody holds are pruned.
    fn lock_for(&self, movie_id: i64) -> Arc<AsyncMutex<()>> {
        let mut locks = self.id_locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.retain(|id, lock| *id == movie_id || Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(movie_id).or_default())
    }

    /// One lookup: true iff a record for `movie_id` exists right now.
    pub async fn check_favorite(&self, movie_id: i64) -> AppResult<bool> {
        let lock = self.lock_for(movie_id);
        let _guard = lock.lock().await;

        let repo = Arc::clone(&self.repo);
        let found = tokio::task::spawn_blocking(move || repo.find_by_id(movie_id))
            .await?
            .map_err(AppError::into_store_error)?;

        log::debug!("Favorite check for movie {}: {}", movie_id, found.is_some());
        Ok(found.is_some())
    }

    /// Flips the flag the caller currently holds.
    ///
    /// `currently_favorite == false` inserts a record copied from `movie`,
    /// otherwise the record is deleted. The insert replaces any existing
    /// row, so racing callers can never leave two records behind.
    pub async fn toggle_favorite(
        &self,
        movie: &MovieRef,
        currently_favorite: bool,
    ) -> AppResult<FavoriteChange> {
        validate_movie(movie)?;

        let movie_id = movie.id();
        let record = FavoriteRecord::from_movie(movie);
        let change = if currently_favorite {
            FavoriteChange::Removed
        } else {
            FavoriteChange::Added
        };

        let lock = self.lock_for(movie_id);
        let _guard = lock.lock().await;

        let repo = Arc::clone(&self.repo);
        let written = tokio::task::spawn_blocking(move || match change {
            FavoriteChange::Added => repo.insert(&record),
            FavoriteChange::Removed => repo.delete(&record),
        })
        .await
        .map_err(AppError::from)
        .and_then(|result| result.map_err(AppError::into_store_error));

        match written {
            Ok(()) => {
                match change {
                    FavoriteChange::Added => self
                        .event_bus
                        .emit(FavoriteAdded::new(movie_id, movie.title().to_string())),
                    FavoriteChange::Removed => self.event_bus.emit(FavoriteRemoved::new(movie_id)),
                }
                log::info!("{}: {}", change.message(), movie);
                Ok(change)
            }
            Err(e) => {
                log::warn!("Favorite toggle for {} failed: {}", movie, e);
                self.event_bus.emit(FavoriteToggleFailed::new(
                    movie_id,
                    change.is_favorite(),
                    e.to_string(),
                ));
                Err(e)
            }
        }
    }

    /// Every saved favorite, ordered by title
    pub async fn list_favorites(&self) -> AppResult<Vec<FavoriteRecord>> {
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || repo.list_all())
            .await?
            .map_err(AppError::into_store_error)
    }
}
