use serde::{Deserialize, Serialize};

/// Poster width requested from the image CDN when none is given
pub const DEFAULT_POSTER_SIZE: &str = "w185";

/// The movie shown on a detail screen.
///
/// Immutable once constructed: the screen owns one for its whole lifetime
/// and every field is read through an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    id: i64,
    title: String,
    release_date: String,
    rating: String,
    synopsis: String,
    poster_path: String,
}

impl MovieRef {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        release_date: impl Into<String>,
        rating: impl Into<String>,
        synopsis: impl Into<String>,
        poster_path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: release_date.into(),
            rating: rating.into(),
            synopsis: synopsis.into(),
            poster_path: poster_path.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn poster_path(&self) -> &str {
        &self.poster_path
    }

    /// Full poster URL, e.g. `https://image.tmdb.org/t/p/w185/abc.jpg`.
    ///
    /// Returns `None` when the movie has no poster.
    pub fn poster_url(&self, image_base_url: &str, size: &str) -> Option<String> {
        if self.poster_path.trim().is_empty() {
            return None;
        }
        let base = image_base_url.trim_end_matches('/');
        let path = self.poster_path.trim_start_matches('/');
        Some(format!("{}/{}/{}", base, size, path))
    }
}

impl std::fmt::Display for MovieRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival() -> MovieRef {
        MovieRef::new(329865, "Arrival", "2016-11-10", "6.9", "Linguist meets aliens.", "/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg")
    }

    #[test]
    fn test_accessors() {
        let movie = arrival();
        assert_eq!(movie.id(), 329865);
        assert_eq!(movie.title(), "Arrival");
        assert_eq!(movie.release_date(), "2016-11-10");
        assert_eq!(movie.rating(), "6.9");
    }

    #[test]
    fn test_poster_url() {
        let movie = arrival();
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/", DEFAULT_POSTER_SIZE).as_deref(),
            Some("https://image.tmdb.org/t/p/w185/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg")
        );
    }

    #[test]
    fn test_poster_url_without_poster() {
        let movie = MovieRef::new(1, "No Poster", "", "", "", "");
        assert!(movie.poster_url("https://image.tmdb.org/t/p", "w500").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(arrival().to_string(), "Arrival (#329865)");
    }
}
