use serde::{Deserialize, Serialize};

/// Generic apology used when no routine could be produced at all.
pub const UNAVAILABLE_SUMMARY: &str = "We're sorry, we couldn't generate a personalized routine \
    right now. Please try again in a moment.";

/// Used when the catalogue handed to the engine is empty.
pub const NO_PRODUCTS_SUMMARY: &str = "We couldn't find any products in our catalogue to build \
    your routine. Please check back soon as new products are added.";

/// A single product picked for a routine step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItem {
    pub product_id: String,
    pub name: String,
    pub reason: String,
}

/// The four routine slots. Every key is always serialized, `null` when unmatched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub cleanser: Option<RoutineItem>,
    pub serum: Option<RoutineItem>,
    pub moisturizer: Option<RoutineItem>,
    pub sunscreen: Option<RoutineItem>,
}

impl Routine {
    /// Slots keyed by their wire name, in routine order.
    pub fn slots(&self) -> [(&'static str, Option<&RoutineItem>); 4] {
        [
            ("cleanser", self.cleanser.as_ref()),
            ("serum", self.serum.as_ref()),
            ("moisturizer", self.moisturizer.as_ref()),
            ("sunscreen", self.sunscreen.as_ref()),
        ]
    }
}

/// Engine output, and the exact JSON shape the language model is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineRecommendation {
    pub routine: Routine,
    pub summary: String,
}

impl RoutineRecommendation {
    /// Terminal fallback: nothing matched and nothing could be computed.
    pub fn unavailable() -> Self {
        Self {
            routine: Routine::default(),
            summary: UNAVAILABLE_SUMMARY.to_string(),
        }
    }

    pub fn no_products() -> Self {
        Self {
            routine: Routine::default(),
            summary: NO_PRODUCTS_SUMMARY.to_string(),
        }
    }
}
