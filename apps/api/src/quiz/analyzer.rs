//! Quiz Analyzer: turns five multiple-choice answers into a `SkinProfile`.
//!
//! Pure and total: unanswered or out-of-range entries contribute nothing.

use std::collections::HashMap;

use crate::models::{AgeRange, SkinProfile, SkinType};
use crate::quiz::questions::{AGE_QUESTION, CONCERN_ORDER, QUESTIONS, QUESTION_COUNT};

/// One slot per question; `None` means unanswered.
pub type Answers = [Option<usize>; QUESTION_COUNT];

pub fn analyze(answers: &Answers) -> SkinProfile {
    SkinProfile {
        skin_type: resolve_skin_type(&tally_scores(answers)),
        concerns: derive_concerns(answers),
        age_range: map_age_range(answers[AGE_QUESTION]),
    }
}

fn tally_scores(answers: &Answers) -> HashMap<SkinType, u32> {
    let mut scores: HashMap<SkinType, u32> =
        SkinType::PRIORITY.iter().map(|t| (*t, 0)).collect();

    for (question, answer) in QUESTIONS.iter().zip(answers.iter()) {
        let Some(option) = question.option(*answer) else {
            continue;
        };
        for (skin_type, weight) in option.scores {
            *scores.entry(*skin_type).or_insert(0) += weight;
        }
    }

    scores
}

/// Highest score wins; equal scores resolve by `SkinType::PRIORITY`.
fn resolve_skin_type(scores: &HashMap<SkinType, u32>) -> SkinType {
    let mut ranked: Vec<(SkinType, u32)> = SkinType::PRIORITY
        .iter()
        .map(|t| (*t, scores.get(t).copied().unwrap_or(0)))
        .collect();
    // stable: equal scores keep priority order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked[0].0
}

fn derive_concerns(answers: &Answers) -> Vec<String> {
    let mut concerns: Vec<String> = Vec::new();

    for idx in CONCERN_ORDER {
        let Some(option) = QUESTIONS[idx].option(answers[idx]) else {
            continue;
        };
        for concern in option.concerns {
            if !concerns.iter().any(|c| c == concern) {
                concerns.push(concern.to_string());
            }
        }
    }

    concerns
}

fn map_age_range(answer: Option<usize>) -> AgeRange {
    answer
        .and_then(|idx| AgeRange::BRACKETS.get(idx).copied())
        .unwrap_or(AgeRange::Unknown)
}
