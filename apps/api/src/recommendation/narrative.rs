//! Reason and summary copy for locally matched routines.

use crate::models::{SkinProfile, SkinType};
use crate::recommendation::taxonomy::RoutineStep;

const GENERIC_BENEFIT: &str = "supporting your skin's health";

const SKIN_TYPE_BENEFITS: [(SkinType, &str); 5] = [
    (
        SkinType::Dry,
        "hydrating ingredients to nourish and moisturize your dry skin",
    ),
    (
        SkinType::Oily,
        "oil-balancing ingredients to control shine on your oily skin",
    ),
    (
        SkinType::Combination,
        "balancing care for both the oily and dry zones of your combination skin",
    ),
    (
        SkinType::Sensitive,
        "gentle, soothing ingredients that respect your sensitive skin",
    ),
    (
        SkinType::Normal,
        "balanced care that maintains the natural health of your normal skin",
    ),
];

pub fn skin_type_benefit(skin_type: SkinType) -> &'static str {
    SKIN_TYPE_BENEFITS
        .iter()
        .find(|(t, _)| *t == skin_type)
        .map(|(_, benefit)| *benefit)
        .unwrap_or(GENERIC_BENEFIT)
}

/// One sentence explaining why a product was picked for `step`.
pub fn step_reason(step: RoutineStep, skin_type: SkinType) -> String {
    let benefit = skin_type_benefit(skin_type);
    match step {
        RoutineStep::Cleanser => {
            format!("This cleanser gently removes impurities while providing {benefit}.")
        }
        RoutineStep::Serum => {
            format!("This serum delivers concentrated active ingredients, bringing {benefit}.")
        }
        RoutineStep::Moisturizer => {
            format!("This moisturizer locks in hydration with {benefit}.")
        }
        RoutineStep::Sunscreen => {
            format!("This sunscreen shields you from UV damage while offering {benefit}.")
        }
    }
}

/// Routine-level paragraph. The concerns clause is dropped entirely when there are none.
pub fn routine_summary(profile: &SkinProfile) -> String {
    let concerns: Vec<&str> = profile
        .concerns
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    let concerns_clause = if concerns.is_empty() {
        String::new()
    } else {
        format!(" and concerns about {}", concerns.join(" and "))
    };

    format!(
        "This personalized routine was built for your {} skin{}. Each step focuses on {}, \
        from cleansing through to daily sun protection.",
        profile.skin_type.as_str(),
        concerns_clause,
        skin_type_benefit(profile.skin_type)
    )
}
