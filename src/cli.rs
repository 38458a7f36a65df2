use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "popular-movies")]
#[command(author, version, about = "Show a movie's details, trailers and reviews; manage favorites")]
pub struct Cli {
    /// TMDB id of the movie to show
    pub movie_id: i64,

    /// Title to display (looked up in favorites when omitted)
    pub title: Option<String>,

    /// Flip the favorite flag once the screen is loaded
    #[arg(long)]
    pub toggle: bool,

    /// Print all saved favorites before exiting
    #[arg(long)]
    pub favorites: bool,

    /// Screen state file; restored from if present, written on exit
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
