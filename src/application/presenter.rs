// src/application/presenter.rs
//
// Presentation boundary of the detail screen.
//
// All callbacks run on the screen task, one at a time, and each fires at
// most once per triggering operation.

use crate::application::view_state::FetchOutcome;
use crate::domain::{Review, Trailer};
use crate::error::AppError;
use crate::services::FavoriteChange;

pub trait Presenter: Send + 'static {
    fn on_favorite_resolved(&mut self, is_favorite: bool);

    fn on_trailers_resolved(&mut self, trailers: &FetchOutcome<Trailer>);

    fn on_reviews_resolved(&mut self, reviews: &FetchOutcome<Review>);

    /// A toggle was accepted; `intended` is the flag to draw until the
    /// write is confirmed or fails.
    fn on_toggle_started(&mut self, _intended: bool) {}

    fn on_toggle_confirmed(&mut self, change: FavoriteChange);

    /// The write failed; the flag is back to its previous value.
    fn on_toggle_failed(&mut self, error: &AppError);

    /// The favorite lookup failed; the flag stays unknown.
    fn on_favorite_check_failed(&mut self, error: &AppError) {
        log::warn!("Favorite status unavailable: {}", error);
    }
}
