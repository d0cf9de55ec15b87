// Shared prompt fragments. Each module that calls the LLM keeps its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Grounding rule: the model may only pick from what it was shown.
pub const CATALOGUE_GROUNDING: &str = "\
    CRITICAL: Only recommend products listed in the catalogue below, and copy their ID \
    exactly into `productId`. Never invent products, IDs, or names. \
    If no listed product fits a step, set that step to null.";
