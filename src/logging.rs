// src/logging.rs
//
// Log sink for the binary.
//
// Library code only uses the `log` macros. `init` installs a
// tracing-subscriber formatter on stderr; its log bridge turns every
// `log` record into a tracing event so both end up in the same place.

use crate::error::{AppError, AppResult};

const CRATE_TARGET: &str = "popular_movies";

/// Turns a configured level into filter directives.
///
/// A bare level ("debug") applies to this crate only. Anything containing
/// `=` is taken as a full directive list and used unchanged.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') {
        level.to_string()
    } else if level.is_empty() {
        format!("{}=info", CRATE_TARGET)
    } else {
        format!("{}={}", CRATE_TARGET, level.to_lowercase())
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(level: &str) -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_directives(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_targets_crate() {
        assert_eq!(filter_directives("DEBUG"), "popular_movies=debug");
        assert_eq!(filter_directives(""), "popular_movies=info");
    }

    #[test]
    fn test_directive_list_passes_through() {
        assert_eq!(
            filter_directives("popular_movies=trace,reqwest=debug"),
            "popular_movies=trace,reqwest=debug"
        );
    }
}
