//! Axum route handlers for the Recommendation API.
//!
//! The catalogue always arrives in the request body; the service never fetches
//! or stores products itself.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Product, RoutineRecommendation, SkinProfile};
use crate::quiz::analyzer::analyze;
use crate::quiz::handlers::answers_from;
use crate::recommendation::engine::RecommendationProvider;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub profile: SkinProfile,
    #[serde(default)]
    pub catalogue: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendation: RoutineRecommendation,
    /// The configured provider, i.e. the path tried first. A generative engine that
    /// fell back to local matching still reports `generative`.
    pub provider: RecommendationProvider,
}

#[derive(Debug, Deserialize)]
pub struct QuizRecommendRequest {
    pub answers: Vec<Option<usize>>,
    #[serde(default)]
    pub catalogue: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct QuizRecommendResponse {
    pub profile: SkinProfile,
    pub recommendation: RoutineRecommendation,
    /// Configured provider, as in `RecommendResponse`.
    pub provider: RecommendationProvider,
}

#[derive(Debug, Serialize)]
pub struct ProviderResponse {
    pub provider: RecommendationProvider,
    pub label: String,
}

/// Rejects prices the storefront could never have produced.
fn validate_catalogue(catalogue: &[Product]) -> Result<(), AppError> {
    match catalogue
        .iter()
        .find(|p| !p.price.is_finite() || p.price < 0.0)
    {
        Some(p) => Err(AppError::Validation(format!(
            "product '{}' has an invalid price: {}",
            p.id, p.price
        ))),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Builds a four-step routine for a profile from the supplied catalogue.
/// Always 200 for a well-formed request: failures degrade to a fallback routine.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    validate_catalogue(&request.catalogue)?;

    let recommendation = state
        .engine
        .recommend(&request.profile, &request.catalogue)
        .await;

    Ok(Json(RecommendResponse {
        recommendation,
        provider: state.engine.provider(),
    }))
}

/// POST /api/v1/quiz/recommend
///
/// Quiz answers straight to a routine: analyze, then recommend.
pub async fn handle_quiz_recommend(
    State(state): State<AppState>,
    Json(request): Json<QuizRecommendRequest>,
) -> Result<Json<QuizRecommendResponse>, AppError> {
    let answers = answers_from(request.answers)?;
    validate_catalogue(&request.catalogue)?;

    let profile = analyze(&answers);
    let recommendation = state.engine.recommend(&profile, &request.catalogue).await;

    Ok(Json(QuizRecommendResponse {
        profile,
        recommendation,
        provider: state.engine.provider(),
    }))
}

/// GET /api/v1/recommendations/provider
///
/// Which strategy the service tries first, for display in the storefront.
pub async fn handle_get_provider(State(state): State<AppState>) -> Json<ProviderResponse> {
    let provider = state.engine.provider();
    Json(ProviderResponse {
        provider,
        label: provider.label(),
    })
}
