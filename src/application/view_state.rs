// src/application/view_state.rs
//
// Everything the detail screen needs to redraw itself, and the snapshot
// that survives the screen being torn down and recreated.
//
// Only the screen actor mutates a ViewState; workers never touch it.

use serde::{Deserialize, Serialize};

use crate::domain::{MovieRef, Review, Trailer};
use crate::error::{AppError, AppResult};
use crate::services::FavoriteChange;

/// Scroll position of the detail screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: i32,
    pub y: i32,
}

impl ScrollOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle of the screen's data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No movie bound yet
    Fresh,
    /// Movie bound, at least one of favorite/trailers/reviews unresolved
    Loading,
    /// All three slices resolved at least once; a failed favorite lookup
    /// counts as resolved with the flag left unknown
    Ready,
}

/// Result of a trailer or review fetch as the presenter sees it
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    Failed(String),
}

/// What a list section should render
#[derive(Debug, PartialEq)]
pub enum SectionContent<'a, T> {
    Items(&'a [T]),
    /// The catalog answered with zero entries
    NoneFound,
    /// The fetch failed; carries the reason
    Error(&'a str),
}

impl<T> FetchOutcome<T> {
    pub fn from_result(result: AppResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => FetchOutcome::Loaded(items),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            FetchOutcome::Loaded(items) => Some(items.as_slice()),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn content(&self) -> SectionContent<'_, T> {
        match self {
            FetchOutcome::Loaded(items) if items.is_empty() => SectionContent::NoneFound,
            FetchOutcome::Loaded(items) => SectionContent::Items(items.as_slice()),
            FetchOutcome::Failed(reason) => SectionContent::Error(reason.as_str()),
        }
    }
}

/// Serializable state saved when the screen goes away.
///
/// A slice that is `None` was never loaded (or failed) and is fetched again
/// after restore; a `Some` slice, even an empty one, is reused as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub movie: Option<MovieRef>,
    pub is_favorite: Option<bool>,
    pub trailers: Option<Vec<Trailer>>,
    pub reviews: Option<Vec<Review>>,
    #[serde(default)]
    pub scroll: ScrollOffset,
}

impl ViewSnapshot {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    movie: Option<MovieRef>,
    is_favorite: Option<bool>,
    favorite_check_failed: bool,
    pending_toggle: Option<bool>,
    trailers: Option<FetchOutcome<Trailer>>,
    reviews: Option<FetchOutcome<Review>>,
    scroll: ScrollOffset,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ViewSnapshot) -> Self {
        Self {
            movie: snapshot.movie,
            is_favorite: snapshot.is_favorite,
            favorite_check_failed: false,
            pending_toggle: None,
            trailers: snapshot.trailers.map(FetchOutcome::Loaded),
            reviews: snapshot.reviews.map(FetchOutcome::Loaded),
            scroll: snapshot.scroll,
        }
    }

    /// State to save for recreation.
    ///
    /// While a toggle is in flight the store may already hold the new value,
    /// so the flag is left out and looked up again after restore.
    pub fn snapshot(&self) -> ViewSnapshot {
        let is_favorite = match self.pending_toggle {
            Some(_) => None,
            None => self.is_favorite,
        };
        ViewSnapshot {
            movie: self.movie.clone(),
            is_favorite,
            trailers: self.trailers.as_ref().and_then(|t| t.items()).map(<[Trailer]>::to_vec),
            reviews: self.reviews.as_ref().and_then(|r| r.items()).map(<[Review]>::to_vec),
            scroll: self.scroll,
        }
    }

    /// Binds the movie; a state holds exactly one movie for its lifetime
    pub fn bind(&mut self, movie: MovieRef) -> AppResult<()> {
        if let Some(bound) = &self.movie {
            return Err(AppError::InvalidState(format!(
                "Detail screen already shows {}",
                bound
            )));
        }
        self.movie = Some(movie);
        Ok(())
    }

    pub fn phase(&self) -> ViewPhase {
        if self.movie.is_none() {
            ViewPhase::Fresh
        } else if (self.is_favorite.is_some() || self.favorite_check_failed)
            && self.trailers.is_some()
            && self.reviews.is_some()
        {
            ViewPhase::Ready
        } else {
            ViewPhase::Loading
        }
    }

    pub fn movie(&self) -> Option<&MovieRef> {
        self.movie.as_ref()
    }

    /// Committed flag: the last value confirmed by the store
    pub fn is_favorite(&self) -> Option<bool> {
        self.is_favorite
    }

    /// Flag to draw: the intended value while a toggle is in flight
    pub fn displayed_favorite(&self) -> Option<bool> {
        self.pending_toggle.or(self.is_favorite)
    }

    /// The lookup failed; the flag stays unknown and toggling stays disabled
    pub fn is_favorite_unavailable(&self) -> bool {
        self.is_favorite.is_none() && self.favorite_check_failed
    }

    pub fn is_toggle_pending(&self) -> bool {
        self.pending_toggle.is_some()
    }

    pub fn trailers(&self) -> Option<&FetchOutcome<Trailer>> {
        self.trailers.as_ref()
    }

    pub fn reviews(&self) -> Option<&FetchOutcome<Review>> {
        self.reviews.as_ref()
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    pub fn needs_favorite_check(&self) -> bool {
        self.movie.is_some() && self.is_favorite.is_none()
    }

    pub fn needs_trailers(&self) -> bool {
        self.movie.is_some() && self.trailers.is_none()
    }

    pub fn needs_reviews(&self) -> bool {
        self.movie.is_some() && self.reviews.is_none()
    }

    pub fn resolve_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = Some(is_favorite);
        self.favorite_check_failed = false;
    }

    pub fn fail_favorite_check(&mut self) {
        self.favorite_check_failed = true;
    }

    pub fn resolve_trailers(&mut self, outcome: FetchOutcome<Trailer>) {
        self.trailers = Some(outcome);
    }

    pub fn resolve_reviews(&mut self, outcome: FetchOutcome<Review>) {
        self.reviews = Some(outcome);
    }

    /// Starts a toggle and returns the intended flag.
    ///
    /// Fails while the flag is unknown or another toggle is in flight.
    pub fn begin_toggle(&mut self) -> AppResult<bool> {
        let current = self.is_favorite.ok_or_else(|| {
            AppError::InvalidState("Favorite status is not resolved yet".to_string())
        })?;
        if self.pending_toggle.is_some() {
            return Err(AppError::InvalidState(
                "A favorite toggle is already in progress".to_string(),
            ));
        }
        let intended = !current;
        self.pending_toggle = Some(intended);
        Ok(intended)
    }

    /// Ends the in-flight toggle. Only a confirmed write moves the committed
    /// flag; a failure leaves it where it was.
    pub fn complete_toggle(&mut self, result: &AppResult<FavoriteChange>) {
        self.pending_toggle = None;
        if let Ok(change) = result {
            self.is_favorite = Some(change.is_favorite());
        }
    }
}
