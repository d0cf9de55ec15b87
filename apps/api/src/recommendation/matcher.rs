//! Deterministic routine matching, the always-available recommendation path.
//!
//! Algorithm, per routine step:
//! 1. Keep products whose lower-cased category text contains one of the step's synonyms
//! 2. Score each: +10 skin-type fit, +5 per matching concern, +2 per key ingredient
//! 3. Stable-sort descending by score; the first product wins (catalogue order breaks ties)
//!
//! No clock, no randomness: identical input always yields identical output.

use tracing::debug;

use crate::models::{Product, Routine, RoutineItem, RoutineRecommendation, SkinProfile};
use crate::recommendation::narrative::{routine_summary, step_reason};
use crate::recommendation::taxonomy::RoutineStep;

pub const SKIN_TYPE_MATCH: u32 = 10;
pub const CONCERN_MATCH: u32 = 5;
pub const KEY_INGREDIENT_MATCH: u32 = 2;

/// Skin-type markers meaning "suits every skin type".
const UNIVERSAL_SKIN_TYPES: &[&str] = &["all", "tout"];

/// Ingredients with a proven track record; each one present earns a bonus.
pub const KEY_INGREDIENTS: &[&str] = &[
    "hyaluronic",
    "niacinamide",
    "vitamin c",
    "aloe",
    "ceramide",
    "salicylic",
    "retinol",
];

/// A qualifying product and its relevance score for one step.
#[derive(Debug, Clone, Copy)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: u32,
}

/// Additive relevance of `product` for `profile`. Step-independent.
pub fn score_product(product: &Product, profile: &SkinProfile) -> u32 {
    let mut score = 0;

    let skin_type = product
        .skin_type
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if skin_type.contains(profile.skin_type.as_str())
        || UNIVERSAL_SKIN_TYPES.iter().any(|u| skin_type.contains(u))
    {
        score += SKIN_TYPE_MATCH;
    }

    let product_concerns = product
        .concerns
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    score += profile
        .concerns
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && product_concerns.contains(c.as_str()))
        .count() as u32
        * CONCERN_MATCH;

    score += KEY_INGREDIENTS
        .iter()
        .filter(|ingredient| product.ingredients.mentions(ingredient))
        .count() as u32
        * KEY_INGREDIENT_MATCH;

    score
}

/// All products qualifying for `step`, highest score first, catalogue order among equals.
pub fn rank_for_step<'a>(
    step: RoutineStep,
    profile: &SkinProfile,
    catalogue: &'a [Product],
) -> Vec<ScoredProduct<'a>> {
    let mut ranked: Vec<ScoredProduct<'a>> = catalogue
        .iter()
        .filter(|p| step.matches(&p.category_text()))
        .map(|product| ScoredProduct {
            product,
            score: score_product(product, profile),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn select_for_step<'a>(
    step: RoutineStep,
    profile: &SkinProfile,
    catalogue: &'a [Product],
) -> Option<ScoredProduct<'a>> {
    rank_for_step(step, profile, catalogue).into_iter().next()
}

/// Builds the full routine locally. Never fails; unmatched steps are `None`.
pub fn match_routine(profile: &SkinProfile, catalogue: &[Product]) -> RoutineRecommendation {
    if catalogue.is_empty() {
        return RoutineRecommendation::no_products();
    }

    let pick = |step: RoutineStep| -> Option<RoutineItem> {
        let chosen = select_for_step(step, profile, catalogue)?;
        debug!(
            "Matched {} -> {} (score {})",
            step.as_str(),
            chosen.product.id,
            chosen.score
        );
        Some(RoutineItem {
            product_id: chosen.product.id.clone(),
            name: chosen.product.name.clone(),
            reason: step_reason(step, profile.skin_type),
        })
    };

    RoutineRecommendation {
        routine: Routine {
            cleanser: pick(RoutineStep::Cleanser),
            serum: pick(RoutineStep::Serum),
            moisturizer: pick(RoutineStep::Moisturizer),
            sunscreen: pick(RoutineStep::Sunscreen),
        },
        summary: routine_summary(profile),
    }
}
