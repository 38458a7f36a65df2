// src/domain/trailer.rs

use serde::{Deserialize, Serialize};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const YOUTUBE_THUMBNAIL_URL: &str = "https://img.youtube.com/vi/";

/// A trailer as returned by the `videos` query. Produced only by a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    key: String,
    name: String,
}

impl Trailer {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Provider key (a YouTube video id)
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn watch_url(&self) -> String {
        format!("{}{}", YOUTUBE_WATCH_URL, self.key)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}{}/0.jpg", YOUTUBE_THUMBNAIL_URL, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_urls() {
        let trailer = Trailer::new("abc123", "Trailer 1");
        assert_eq!(trailer.watch_url(), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(trailer.thumbnail_url(), "https://img.youtube.com/vi/abc123/0.jpg");
    }
}
