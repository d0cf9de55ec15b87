//! The fixed five-question skin quiz.
//!
//! Weights are behavioral constants: changing any of them changes which routine a
//! customer is shown. Keep them as they are unless the product owners ask otherwise.

use serde::Serialize;

use crate::models::SkinType;

pub const QUESTION_COUNT: usize = 5;

/// Index of the age question; it carries no scores.
pub const AGE_QUESTION: usize = 4;

/// Concern derivation order: primary concern first, then post-wash feeling,
/// oiliness, reactivity.
pub const CONCERN_ORDER: [usize; 4] = [1, 0, 2, 3];

#[derive(Debug)]
pub struct QuizOption {
    pub label: &'static str,
    pub scores: &'static [(SkinType, u32)],
    pub concerns: &'static [&'static str],
}

#[derive(Debug)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    /// Resolves an answer to its option; out-of-range indices count as unanswered.
    pub fn option(&self, answer: Option<usize>) -> Option<&'static QuizOption> {
        answer.and_then(|idx| self.options.get(idx))
    }
}

const fn opt(
    label: &'static str,
    scores: &'static [(SkinType, u32)],
    concerns: &'static [&'static str],
) -> QuizOption {
    QuizOption {
        label,
        scores,
        concerns,
    }
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: "after_wash",
        prompt: "How does your skin feel a few hours after washing it?",
        options: &[
            opt("Tight and dry", &[(SkinType::Dry, 2)], &["tightness"]),
            opt("Comfortable", &[(SkinType::Normal, 2)], &[]),
            opt("Shiny all over", &[(SkinType::Oily, 2)], &[]),
            opt(
                "Shiny on the T-zone, dry on the cheeks",
                &[(SkinType::Combination, 2)],
                &[],
            ),
            opt("Itchy or red", &[(SkinType::Sensitive, 2)], &[]),
        ],
    },
    Question {
        id: "primary_concern",
        prompt: "What is your main skin concern?",
        options: &[
            opt("Acne", &[(SkinType::Oily, 1)], &["acne", "breakouts"]),
            opt("Redness", &[(SkinType::Sensitive, 1)], &["redness", "irritation"]),
            opt("Dryness", &[(SkinType::Dry, 1)], &["dryness", "dehydration"]),
            opt(
                "Sensitivity",
                &[(SkinType::Sensitive, 2)],
                &["sensitivity", "irritation"],
            ),
            opt("None in particular", &[(SkinType::Normal, 1)], &[]),
        ],
    },
    Question {
        id: "oiliness",
        prompt: "How oily does your skin get during the day?",
        options: &[
            opt("Not at all", &[(SkinType::Dry, 1)], &[]),
            opt("Slightly", &[(SkinType::Normal, 1)], &[]),
            opt(
                "Moderately, mostly on the T-zone",
                &[(SkinType::Combination, 2)],
                &["excess oil"],
            ),
            opt("Very oily", &[(SkinType::Oily, 2)], &["excess oil"]),
        ],
    },
    Question {
        id: "reactivity",
        prompt: "How often does your skin react to new products or fragrance?",
        options: &[
            opt("Easily", &[(SkinType::Sensitive, 2)], &["sensitivity"]),
            opt("Sometimes", &[(SkinType::Sensitive, 1)], &["sensitivity"]),
            opt("Rarely", &[(SkinType::Normal, 1)], &[]),
            opt("Never", &[(SkinType::Normal, 1)], &[]),
        ],
    },
    Question {
        id: "age",
        prompt: "What is your age range?",
        options: &[
            opt("Under 18", &[], &[]),
            opt("18-25", &[], &[]),
            opt("26-35", &[], &[]),
            opt("36-45", &[], &[]),
            opt("46+", &[], &[]),
        ],
    },
];

/// Display-only view of a question, without the scoring table.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
}

pub fn question_views() -> Vec<QuestionView> {
    QUESTIONS
        .iter()
        .map(|q| QuestionView {
            id: q.id,
            prompt: q.prompt,
            options: q.options.iter().map(|o| o.label).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_question_has_no_scores() {
        assert!(QUESTIONS[AGE_QUESTION]
            .options
            .iter()
            .all(|o| o.scores.is_empty() && o.concerns.is_empty()));
    }

    #[test]
    fn test_weights_are_one_or_two() {
        for q in &QUESTIONS {
            for o in q.options {
                for (_, w) in o.scores {
                    assert!(*w == 1 || *w == 2, "{} / {} has weight {w}", q.id, o.label);
                }
            }
        }
    }

    #[test]
    fn test_option_out_of_range_is_none() {
        assert!(QUESTIONS[2].option(Some(4)).is_none());
        assert!(QUESTIONS[2].option(None).is_none());
        assert_eq!(QUESTIONS[2].option(Some(3)).unwrap().label, "Very oily");
    }

    #[test]
    fn test_question_views_hide_scores() {
        let views = question_views();
        assert_eq!(views.len(), QUESTION_COUNT);
        assert_eq!(views[1].options.len(), 5);
        let json = serde_json::to_value(&views).unwrap();
        assert!(json[0].get("scores").is_none());
    }
}
