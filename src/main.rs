// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use popular_movies::application::{
    AppState, DetailScreen, DetailScreenHandle, ErrorResponse, ErrorType, FetchOutcome, Presenter,
    SectionContent, ViewSnapshot,
};
use popular_movies::config::AppConfig;
use popular_movies::domain::{MovieRef, Review, Trailer, DEFAULT_POSTER_SIZE};
use popular_movies::error::AppError;
use popular_movies::logging;
use popular_movies::services::FavoriteChange;

mod cli;

use cli::Cli;

/// Prints presenter callbacks to stdout
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn on_favorite_resolved(&mut self, is_favorite: bool) {
        if is_favorite {
            println!("[*] In your favorites");
        } else {
            println!("[ ] Not in your favorites");
        }
    }

    fn on_trailers_resolved(&mut self, trailers: &FetchOutcome<Trailer>) {
        match trailers.content() {
            SectionContent::Items(items) => {
                println!("Trailers:");
                for trailer in items {
                    println!("  {} - {}", trailer.name(), trailer.watch_url());
                }
            }
            SectionContent::NoneFound => println!("No trailers found"),
            SectionContent::Error(reason) => println!("Trailers unavailable: {}", reason),
        }
    }

    fn on_reviews_resolved(&mut self, reviews: &FetchOutcome<Review>) {
        match reviews.content() {
            SectionContent::Items(items) => {
                println!("Reviews:");
                for review in items {
                    println!("  {}: {}", review.author(), review.content());
                }
            }
            SectionContent::NoneFound => println!("No reviews found"),
            SectionContent::Error(reason) => println!("Reviews unavailable: {}", reason),
        }
    }

    fn on_toggle_started(&mut self, intended: bool) {
        if intended {
            println!("Adding to favorites...");
        } else {
            println!("Removing from favorites...");
        }
    }

    fn on_toggle_confirmed(&mut self, change: FavoriteChange) {
        println!("{}", change.message());
    }

    fn on_toggle_failed(&mut self, error: &AppError) {
        println!("Could not update favorites: {}", error);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    logging::init(&config.log_level)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers.worker_threads)
        .max_blocking_threads(config.workers.max_blocking_threads)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run(cli, config))
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let app = AppState::initialize(&config).context("Failed to initialize application")?;

    let handle = open_screen(&app, &cli, &config).await?;
    handle.wait_until_ready().await?;

    if cli.toggle {
        // Store failures already reached the presenter; only rejections are printed here
        if let Err(e) = handle.toggle_favorite().await {
            let response = ErrorResponse::from_app_error(e);
            if response.error_type == ErrorType::Validation {
                println!("{}", response.message);
            }
        }
    }

    let snapshot = handle.close().await?;
    if let Some(path) = &cli.state {
        std::fs::write(path, snapshot.to_json()?)
            .with_context(|| format!("Failed to save screen state to {}", path.display()))?;
    }

    if cli.favorites {
        let favorites = app.favorites.list_favorites().await?;
        println!("Favorites ({}):", favorites.len());
        for record in favorites {
            println!("  {}", record.to_movie_ref());
        }
    }

    Ok(())
}

async fn open_screen(app: &AppState, cli: &Cli, config: &AppConfig) -> Result<DetailScreenHandle> {
    if let Some(snapshot) = cli.state.as_deref().and_then(load_snapshot) {
        let restorable = snapshot.movie.as_ref().map(MovieRef::id) == Some(cli.movie_id);
        if restorable {
            if let Some(movie) = &snapshot.movie {
                print_header(movie, config);
            }
            return Ok(DetailScreen::restore(app, snapshot, ConsolePresenter)?);
        }
        log::info!("Saved state is for another movie, opening {} fresh", cli.movie_id);
    }

    let movie = resolve_movie(app, cli).await?;
    print_header(&movie, config);
    Ok(DetailScreen::open(app, movie, ConsolePresenter)?)
}

/// Uses the given title, else the saved favorite, else a placeholder
async fn resolve_movie(app: &AppState, cli: &Cli) -> Result<MovieRef> {
    if let Some(title) = &cli.title {
        return Ok(MovieRef::new(cli.movie_id, title.as_str(), "", "", "", ""));
    }

    let saved = app
        .favorites
        .list_favorites()
        .await?
        .into_iter()
        .find(|record| record.id == cli.movie_id);

    Ok(match saved {
        Some(record) => record.to_movie_ref(),
        None => MovieRef::new(cli.movie_id, format!("Movie {}", cli.movie_id), "", "", "", ""),
    })
}

fn load_snapshot(path: &Path) -> Option<ViewSnapshot> {
    let json = std::fs::read_to_string(path).ok()?;
    match ViewSnapshot::from_json(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::warn!("Ignoring unreadable screen state {}: {}", path.display(), e);
            None
        }
    }
}

fn print_header(movie: &MovieRef, config: &AppConfig) {
    println!("{}", movie);
    if !movie.release_date().is_empty() {
        println!("Released: {}", movie.release_date());
    }
    if !movie.rating().is_empty() {
        println!("Rating: {}/10", movie.rating());
    }
    if let Some(poster) = movie.poster_url(&config.catalog.image_base_url, DEFAULT_POSTER_SIZE) {
        println!("Poster: {}", poster);
    }
    if !movie.synopsis().is_empty() {
        println!("{}", movie.synopsis());
    }
}
