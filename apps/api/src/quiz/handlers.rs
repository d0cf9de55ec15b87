//! Axum route handlers for the Quiz API.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SkinProfile;
use crate::quiz::analyzer::{analyze, Answers};
use crate::quiz::questions::{question_views, QuestionView, QUESTION_COUNT};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// One entry per question, `null` when unanswered.
    pub answers: Vec<Option<usize>>,
}

/// Converts wire answers into the fixed-size form the analyzer takes.
pub fn answers_from(raw: Vec<Option<usize>>) -> Result<Answers, AppError> {
    let len = raw.len();
    Answers::try_from(raw).map_err(|_| {
        AppError::Validation(format!(
            "answers must have exactly {QUESTION_COUNT} entries, got {len}"
        ))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
///
/// Returns the question set for display, without scoring weights.
pub async fn handle_get_questions() -> Json<Vec<QuestionView>> {
    Json(question_views())
}

/// POST /api/v1/quiz/analyze
///
/// Scores the answers and returns the resulting skin profile.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SkinProfile>, AppError> {
    let answers = answers_from(request.answers)?;
    Ok(Json(analyze(&answers)))
}
