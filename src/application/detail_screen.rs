// src/application/detail_screen.rs
//
// Detail screen actor.
//
// One tokio task owns the ViewState and the Presenter. Favorite lookups,
// toggle writes and catalog fetches run on their own tasks and hand their
// single result back through the screen's mailbox. Once the screen is
// closed (or its handle dropped) the mailbox is gone and late results
// are discarded.

use tokio::sync::{mpsc, oneshot, watch};

use crate::application::presenter::Presenter;
use crate::application::state::AppState;
use crate::application::view_state::{FetchOutcome, ScrollOffset, ViewPhase, ViewSnapshot, ViewState};
use crate::domain::{validate_movie, MovieRef, Review, Trailer};
use crate::error::{AppError, AppResult};
use crate::services::FavoriteChange;

type ToggleReply = oneshot::Sender<AppResult<FavoriteChange>>;

enum ScreenMessage {
    FavoriteResolved(AppResult<bool>),
    TrailersResolved(AppResult<Vec<Trailer>>),
    ReviewsResolved(AppResult<Vec<Review>>),
    ToggleRequested(ToggleReply),
    ToggleCompleted {
        result: AppResult<FavoriteChange>,
        reply: ToggleReply,
    },
    ScrollTo(ScrollOffset),
    Snapshot(oneshot::Sender<ViewSnapshot>),
    Close(oneshot::Sender<ViewSnapshot>),
    Destroyed,
}

pub struct DetailScreen;

impl DetailScreen {
    /// Shows `movie` on a fresh screen and starts the favorite lookup and
    /// both fetches. Must be called from within a tokio runtime.
    pub fn open<P: Presenter>(app: &AppState, movie: MovieRef, presenter: P) -> AppResult<DetailScreenHandle> {
        validate_movie(&movie)?;

        let mut state = ViewState::new();
        state.bind(movie)?;

        Ok(Self::launch(app, state, presenter))
    }

    /// Recreates a screen from a saved snapshot. Slices present in the
    /// snapshot are shown as is; only the missing ones are loaded.
    pub fn restore<P: Presenter>(
        app: &AppState,
        snapshot: ViewSnapshot,
        presenter: P,
    ) -> AppResult<DetailScreenHandle> {
        match &snapshot.movie {
            Some(movie) => validate_movie(movie)?,
            None => {
                return Err(AppError::InvalidState(
                    "Snapshot does not contain a movie".to_string(),
                ))
            }
        }

        Ok(Self::launch(app, ViewState::from_snapshot(snapshot), presenter))
    }

    fn launch<P: Presenter>(app: &AppState, state: ViewState, presenter: P) -> DetailScreenHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let (phase_tx, phase_rx) = watch::channel(state.phase());

        let actor = ScreenActor {
            app: app.clone(),
            state,
            presenter,
            tx: tx.clone(),
            phase_tx,
        };
        tokio::spawn(actor.run(rx));

        DetailScreenHandle { tx, phase_rx }
    }
}

/// The view's side of a running detail screen.
///
/// Dropping the handle destroys the screen.
pub struct DetailScreenHandle {
    tx: mpsc::UnboundedSender<ScreenMessage>,
    phase_rx: watch::Receiver<ViewPhase>,
}

impl DetailScreenHandle {
    pub fn phase(&self) -> ViewPhase {
        *self.phase_rx.borrow()
    }

    pub async fn wait_until_ready(&self) -> AppResult<()> {
        let mut phase_rx = self.phase_rx.clone();
        phase_rx
            .wait_for(|phase| *phase == ViewPhase::Ready)
            .await
            .map(|_| ())
            .map_err(|_| screen_closed())
    }

    /// Flips the favorite flag; resolves once the write is confirmed or failed.
    pub async fn toggle_favorite(&self) -> AppResult<FavoriteChange> {
        let (reply, response) = oneshot::channel();
        self.send(ScreenMessage::ToggleRequested(reply))?;
        response.await.map_err(|_| screen_closed())?
    }

    pub fn scroll_to(&self, x: i32, y: i32) -> AppResult<()> {
        self.send(ScreenMessage::ScrollTo(ScrollOffset::new(x, y)))
    }

    pub async fn snapshot(&self) -> AppResult<ViewSnapshot> {
        let (reply, response) = oneshot::channel();
        self.send(ScreenMessage::Snapshot(reply))?;
        response.await.map_err(|_| screen_closed())
    }

    /// Tears the screen down and returns the state to save for recreation
    pub async fn close(self) -> AppResult<ViewSnapshot> {
        let (reply, response) = oneshot::channel();
        self.send(ScreenMessage::Close(reply))?;
        response.await.map_err(|_| screen_closed())
    }

    fn send(&self, message: ScreenMessage) -> AppResult<()> {
        self.tx.send(message).map_err(|_| screen_closed())
    }
}

impl Drop for DetailScreenHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(ScreenMessage::Destroyed);
    }
}

fn screen_closed() -> AppError {
    AppError::InvalidState("Detail screen is closed".to_string())
}

struct ScreenActor<P: Presenter> {
    app: AppState,
    state: ViewState,
    presenter: P,
    tx: mpsc::UnboundedSender<ScreenMessage>,
    phase_tx: watch::Sender<ViewPhase>,
}

impl<P: Presenter> ScreenActor<P> {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<ScreenMessage>) {
        self.start();

        while let Some(message) = rx.recv().await {
            match message {
                ScreenMessage::Close(reply) => {
                    let _ = reply.send(self.state.snapshot());
                    break;
                }
                ScreenMessage::Destroyed => break,
                other => self.handle(other),
            }
            self.publish_phase();
        }

        if let Some(movie) = self.state.movie() {
            log::debug!("Detail screen for {} closed", movie);
        }
    }

    /// Presents whatever is already known and launches what is missing
    fn start(&mut self) {
        let Some(movie) = self.state.movie().cloned() else {
            return;
        };

        if self.state.needs_favorite_check() {
            self.spawn_favorite_check(movie.id());
        } else if let Some(is_favorite) = self.state.is_favorite() {
            self.presenter.on_favorite_resolved(is_favorite);
        }

        if self.state.needs_trailers() {
            self.spawn_trailer_fetch(movie.id());
        } else if let Some(trailers) = self.state.trailers() {
            self.presenter.on_trailers_resolved(trailers);
        }

        if self.state.needs_reviews() {
            self.spawn_review_fetch(movie.id());
        } else if let Some(reviews) = self.state.reviews() {
            self.presenter.on_reviews_resolved(reviews);
        }

        self.publish_phase();
    }

    fn handle(&mut self, message: ScreenMessage) {
        match message {
            ScreenMessage::FavoriteResolved(Ok(is_favorite)) => {
                self.state.resolve_favorite(is_favorite);
                self.presenter.on_favorite_resolved(is_favorite);
            }
            ScreenMessage::FavoriteResolved(Err(e)) => {
                self.state.fail_favorite_check();
                self.presenter.on_favorite_check_failed(&e);
            }
            ScreenMessage::TrailersResolved(result) => {
                self.state.resolve_trailers(FetchOutcome::from_result(result));
                if let Some(trailers) = self.state.trailers() {
                    self.presenter.on_trailers_resolved(trailers);
                }
            }
            ScreenMessage::ReviewsResolved(result) => {
                self.state.resolve_reviews(FetchOutcome::from_result(result));
                if let Some(reviews) = self.state.reviews() {
                    self.presenter.on_reviews_resolved(reviews);
                }
            }
            ScreenMessage::ToggleRequested(reply) => self.begin_toggle(reply),
            ScreenMessage::ToggleCompleted { result, reply } => {
                self.state.complete_toggle(&result);
                match &result {
                    Ok(change) => self.presenter.on_toggle_confirmed(*change),
                    Err(e) => self.presenter.on_toggle_failed(e),
                }
                let _ = reply.send(result);
            }
            ScreenMessage::ScrollTo(offset) => self.state.set_scroll(offset),
            ScreenMessage::Snapshot(reply) => {
                let _ = reply.send(self.state.snapshot());
            }
            ScreenMessage::Close(_) | ScreenMessage::Destroyed => {}
        }
    }

    fn begin_toggle(&mut self, reply: ToggleReply) {
        let Some(movie) = self.state.movie().cloned() else {
            let _ = reply.send(Err(AppError::InvalidState("No movie bound".to_string())));
            return;
        };

        let intended = match self.state.begin_toggle() {
            Ok(intended) => intended,
            Err(e) => {
                log::debug!("Ignoring favorite toggle for {}: {}", movie, e);
                let _ = reply.send(Err(e));
                return;
            }
        };
        self.presenter.on_toggle_started(intended);

        let favorites = self.app.favorites.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = favorites.toggle_favorite(&movie, !intended).await;
            deliver(&tx, ScreenMessage::ToggleCompleted { result, reply }, "toggle result", movie.id());
        });
    }

    fn spawn_favorite_check(&self, movie_id: i64) {
        let favorites = self.app.favorites.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = favorites.check_favorite(movie_id).await;
            deliver(&tx, ScreenMessage::FavoriteResolved(result), "favorite status", movie_id);
        });
    }

    fn spawn_trailer_fetch(&self, movie_id: i64) {
        let orchestrator = self.app.orchestrator.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = orchestrator.fetch_trailers(movie_id).await;
            deliver(&tx, ScreenMessage::TrailersResolved(result), "trailers", movie_id);
        });
    }

    fn spawn_review_fetch(&self, movie_id: i64) {
        let orchestrator = self.app.orchestrator.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = orchestrator.fetch_reviews(movie_id).await;
            deliver(&tx, ScreenMessage::ReviewsResolved(result), "reviews", movie_id);
        });
    }

    fn publish_phase(&self) {
        let phase = self.state.phase();
        self.phase_tx.send_if_modified(|current| {
            if *current == phase {
                return false;
            }
            *current = phase;
            true
        });
    }
}

fn deliver(tx: &mpsc::UnboundedSender<ScreenMessage>, message: ScreenMessage, what: &str, movie_id: i64) {
    if tx.send(message).is_err() {
        log::debug!("Detail screen for movie {} is gone; dropping {}", movie_id, what);
    }
}
