use crate::recommendation::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless between calls; cloning only bumps the generator's `Arc`.
    pub engine: RecommendationEngine,
}
