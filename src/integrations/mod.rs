// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;
pub mod tmdb;

pub use catalog::{CatalogEndpoint, CatalogQuery, RemoteCatalog};
pub use tmdb::client::TmdbCatalog;
pub use tmdb::parser::{parse_reviews, parse_trailers};

#[cfg(test)]
pub use catalog::MockRemoteCatalog;
