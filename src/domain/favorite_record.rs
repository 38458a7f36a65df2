// src/domain/favorite_record.rs

use serde::{Deserialize, Serialize};

use super::movie::MovieRef;

/// A persisted favorite.
///
/// The existence of the row is the favorite flag. Every field is copied
/// from the movie at insert time; nothing references the MovieRef afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub poster_path: String,
    pub rating: String,
    pub synopsis: String,
}

impl FavoriteRecord {
    pub fn from_movie(movie: &MovieRef) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().to_string(),
            release_date: movie.release_date().to_string(),
            poster_path: movie.poster_path().to_string(),
            rating: movie.rating().to_string(),
            synopsis: movie.synopsis().to_string(),
        }
    }

    /// Rebuilds the movie so the favorites list can open its detail screen.
    pub fn to_movie_ref(&self) -> MovieRef {
        MovieRef::new(
            self.id,
            self.title.clone(),
            self.release_date.clone(),
            self.rating.clone(),
            self.synopsis.clone(),
            self.poster_path.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_movie_fields() {
        let movie = MovieRef::new(42, "Hitchhiker", "2005-04-28", "6.8", "Don't panic.", "/h.jpg");
        let record = FavoriteRecord::from_movie(&movie);

        assert_eq!(record.id, 42);
        assert_eq!(record.title, "Hitchhiker");
        assert_eq!(record.release_date, "2005-04-28");
        assert_eq!(record.poster_path, "/h.jpg");
        assert_eq!(record.rating, "6.8");
        assert_eq!(record.synopsis, "Don't panic.");
        assert_eq!(record.to_movie_ref(), movie);
    }
}
