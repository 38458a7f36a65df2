// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod detail_orchestrator;
pub mod favorite_controller;

pub use detail_orchestrator::DetailDataOrchestrator;

pub use favorite_controller::{FavoriteChange, FavoriteStateController};
