//! Parsing of the language model's routine reply.
//!
//! Models wrap their JSON in prose or code fences often enough that the reply is
//! never decoded directly: the first brace-balanced `{...}` span is cut out first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Product, RoutineRecommendation};

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("reply contains no complete JSON object")]
    NoJsonObject,

    #[error("JSON object does not match the routine shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{step} references unknown product '{product_id}'")]
    UnknownProduct { step: &'static str, product_id: String },

    #[error("summary is empty")]
    EmptySummary,
}

/// Returns the first top-level brace-balanced span in `text`.
/// Braces inside JSON string literals are not counted.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Decodes and validates a reply against the catalogue it was built from.
pub fn parse_routine_reply(
    text: &str,
    catalogue: &[Product],
) -> Result<RoutineRecommendation, ResponseError> {
    let json = extract_json_object(text).ok_or(ResponseError::NoJsonObject)?;
    let recommendation: RoutineRecommendation = serde_json::from_str(json)?;

    let known_ids: HashSet<&str> = catalogue.iter().map(|p| p.id.as_str()).collect();
    for (step, item) in recommendation.routine.slots() {
        if let Some(item) = item {
            if !known_ids.contains(item.product_id.as_str()) {
                return Err(ResponseError::UnknownProduct {
                    step,
                    product_id: item.product_id.clone(),
                });
            }
        }
    }

    if recommendation.summary.trim().is_empty() {
        return Err(ResponseError::EmptySummary);
    }

    Ok(recommendation)
}
