//! Routine steps and the synonym tables that classify catalogue products into them.
//!
//! The storefront's category field is free text in English and French, so
//! classification is a case-insensitive substring match against these tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineStep {
    Cleanser,
    Serum,
    Moisturizer,
    Sunscreen,
}

impl RoutineStep {
    /// Routine order.
    pub const ALL: [RoutineStep; 4] = [
        RoutineStep::Cleanser,
        RoutineStep::Serum,
        RoutineStep::Moisturizer,
        RoutineStep::Sunscreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineStep::Cleanser => "cleanser",
            RoutineStep::Serum => "serum",
            RoutineStep::Moisturizer => "moisturizer",
            RoutineStep::Sunscreen => "sunscreen",
        }
    }

    pub fn synonyms(&self) -> &'static [&'static str] {
        STEP_SYNONYMS
            .iter()
            .find(|(step, _)| step == self)
            .map(|(_, synonyms)| *synonyms)
            .unwrap_or(&[])
    }

    /// True if any synonym occurs in `category_text` (already lower-cased).
    pub fn matches(&self, category_text: &str) -> bool {
        self.synonyms().iter().any(|s| category_text.contains(s))
    }
}

pub const STEP_SYNONYMS: [(RoutineStep, &[&str]); 4] = [
    (
        RoutineStep::Cleanser,
        &["cleanser", "cleansers", "nettoyant", "gel", "mousse"],
    ),
    (RoutineStep::Serum, &["serum", "serums", "sérum"]),
    (
        RoutineStep::Moisturizer,
        &["moisturizer", "moisturizers", "cream", "crème", "hydratant"],
    ),
    (
        RoutineStep::Sunscreen,
        &["sunscreen", "spf", "sun", "solaire"],
    ),
];

/// Categories beyond the four steps that are still worth showing the language model.
const EXTRA_SKINCARE_CATEGORIES: &[&str] = &[
    "toner",
    "tonique",
    "lotion",
    "mask",
    "masque",
    "exfoliant",
    "oil",
    "huile",
    "balm",
    "baume",
    "protection",
    "écran",
];

/// True if the product belongs in the catalogue excerpt sent to the language model.
pub fn is_skincare_category(category_text: &str) -> bool {
    RoutineStep::ALL.iter().any(|step| step.matches(category_text))
        || EXTRA_SKINCARE_CATEGORIES
            .iter()
            .any(|c| category_text.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_has_synonyms() {
        for step in RoutineStep::ALL {
            assert!(!step.synonyms().is_empty(), "{} has no synonyms", step.as_str());
        }
    }

    #[test]
    fn test_french_categories_classify() {
        assert!(RoutineStep::Cleanser.matches("soins nettoyant"));
        assert!(RoutineStep::Serum.matches("sérum"));
        assert!(RoutineStep::Moisturizer.matches("crème de jour"));
        assert!(RoutineStep::Sunscreen.matches("protection solaire"));
    }

    #[test]
    fn test_unrelated_category_matches_no_step() {
        let text = "accessories headband";
        assert!(RoutineStep::ALL.iter().all(|s| !s.matches(text)));
        assert!(!is_skincare_category(text));
    }

    #[test]
    fn test_extra_categories_are_allowed_for_prompts() {
        assert!(is_skincare_category("toner"));
        assert!(is_skincare_category("huile démaquillante"));
        assert!(!RoutineStep::ALL.iter().any(|s| s.matches("toner")));
    }

    #[test]
    fn test_step_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoutineStep::Moisturizer).unwrap(),
            "\"moisturizer\""
        );
    }
}
