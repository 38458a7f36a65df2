// src/domain/review.rs

use serde::{Deserialize, Serialize};

/// A user review as returned by the `reviews` query. Produced only by a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    author: String,
    content: String,
    url: String,
}

impl Review {
    pub fn new(author: impl Into<String>, content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            url: url.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Link to the full review on the provider site
    pub fn url(&self) -> &str {
        &self.url
    }
}
