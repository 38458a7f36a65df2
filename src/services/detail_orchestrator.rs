// src/services/detail_orchestrator.rs
//
// Trailer and review fetching for the detail screen.
//
// Each fetch is one request plus one parse. The two fetches share nothing:
// no rate limit, no cancellation, no retry. A failure is returned as an
// error so callers can tell "nothing found" (Ok(empty)) from "could not
// load" (Err).

use std::sync::Arc;

use crate::domain::{Review, Trailer};
use crate::error::AppResult;
use crate::events::{CatalogFetchFailed, EventBus, ReviewsFetched, TrailersFetched};
use crate::integrations::{parse_reviews, parse_trailers, CatalogEndpoint, CatalogQuery, RemoteCatalog};

pub struct DetailDataOrchestrator {
    catalog: Arc<dyn RemoteCatalog>,
    endpoint: CatalogEndpoint,
    event_bus: Arc<EventBus>,
}

impl DetailDataOrchestrator {
    pub fn new(
        catalog: Arc<dyn RemoteCatalog>,
        endpoint: CatalogEndpoint,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            endpoint,
            event_bus,
        }
    }

    pub async fn fetch_trailers(&self, movie_id: i64) -> AppResult<Vec<Trailer>> {
        let trailers = self.fetch(movie_id, CatalogQuery::Videos, parse_trailers).await?;
        self.event_bus.emit(TrailersFetched::new(movie_id, trailers.len()));
        Ok(trailers)
    }

    pub async fn fetch_reviews(&self, movie_id: i64) -> AppResult<Vec<Review>> {
        let reviews = self.fetch(movie_id, CatalogQuery::Reviews, parse_reviews).await?;
        self.event_bus.emit(ReviewsFetched::new(movie_id, reviews.len()));
        Ok(reviews)
    }

    async fn fetch<T>(
        &self,
        movie_id: i64,
        query: CatalogQuery,
        parse: fn(&str) -> AppResult<Vec<T>>,
    ) -> AppResult<Vec<T>> {
        let url = self.endpoint.url_for(movie_id, query);
        log::debug!("Fetching {}", self.endpoint.redacted_url_for(movie_id, query));

        let result = match self.catalog.get(&url).await {
            Ok(body) => parse(&body),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            if e.is_fetch_failure() {
                log::warn!("Problem retrieving {} for movie {}: {}", query, movie_id, e);
            } else {
                log::error!("Unexpected error retrieving {} for movie {}: {}", query, movie_id, e);
            }
            self.event_bus.emit(CatalogFetchFailed::new(
                movie_id,
                query.path_segment().to_string(),
                e.to_string(),
            ));
        }

        result
    }
}
