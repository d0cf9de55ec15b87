// All LLM prompt constants for the Recommendation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{CATALOGUE_GROUNDING, JSON_ONLY_SYSTEM};
use crate::models::{Product, SkinProfile};
use crate::recommendation::taxonomy::is_skincare_category;

/// Persona half of the system prompt; `routine_system()` appends the JSON-only rules.
const ROUTINE_PERSONA: &str = "You are an expert skincare advisor for an online skincare \
    boutique. You build simple four-step routines (cleanser, serum, moisturizer, sunscreen) \
    from the boutique's own catalogue.";

/// Routine prompt template.
/// Replace: {grounding_instruction}, {skin_type}, {concerns}, {age_range}, {products}
pub const ROUTINE_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

CUSTOMER SKIN PROFILE:
- Skin type: {skin_type}
- Concerns: {concerns}
- Age range: {age_range}

CATALOGUE (the ONLY products you may recommend):
{products}

Pick at most one product for each routine step and explain each pick in one sentence
addressed to the customer. Return a JSON object with this EXACT schema (no extra fields):
{
  "routine": {
    "cleanser": {"productId": "exact-id-from-catalogue", "name": "Product name", "reason": "Why it suits this customer"},
    "serum": {"productId": "...", "name": "...", "reason": "..."},
    "moisturizer": {"productId": "...", "name": "...", "reason": "..."},
    "sunscreen": {"productId": "...", "name": "...", "reason": "..."}
  },
  "summary": "One short paragraph explaining how the routine works together for this skin profile"
}

Any step with no suitable product MUST be null."#;

pub fn routine_system() -> String {
    format!("{ROUTINE_PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Renders one catalogue entry as a fixed multi-line block.
pub fn product_block(product: &Product) -> String {
    let ingredients = if product.ingredients.is_empty() {
        "N/A".to_string()
    } else {
        product.ingredients.tokens().join(", ")
    };
    let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| "N/A".to_string());

    format!(
        "ID: {}\nName: {}\nCategory: {}\nSkin type: {}\nConcerns: {}\nIngredients: {}\nDescription: {}\nPrice: {:.2}",
        product.id,
        product.name,
        product.category_label(),
        or_na(&product.skin_type),
        or_na(&product.concerns),
        ingredients,
        or_na(&product.description),
        product.price,
    )
}

/// Builds the user prompt. Returns `None` when no catalogue entry is skincare,
/// since there is nothing for the model to choose from.
pub fn build_routine_prompt(profile: &SkinProfile, catalogue: &[Product]) -> Option<String> {
    let blocks: Vec<String> = catalogue
        .iter()
        .filter(|p| is_skincare_category(&p.category_text()))
        .map(product_block)
        .collect();

    if blocks.is_empty() {
        return None;
    }

    let concerns = if profile.concerns.is_empty() {
        "none reported".to_string()
    } else {
        profile.concerns.join(", ")
    };

    let products = blocks.join("\n\n");
    Some(fill_template(
        ROUTINE_PROMPT_TEMPLATE,
        &[
            ("grounding_instruction", CATALOGUE_GROUNDING),
            ("skin_type", profile.skin_type.as_str()),
            ("concerns", &concerns),
            ("age_range", profile.age_range.as_str()),
            ("products", &products),
        ],
    ))
}

/// Substitutes `{key}` placeholders in one left-to-right pass. Inserted values are
/// never rescanned, so client text containing `{products}` stays literal.
/// Unknown braces (the JSON schema) pass through untouched.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = values.iter().find_map(|&(key, value)| {
            tail.strip_prefix('{')?
                .strip_prefix(key)?
                .strip_prefix('}')
                .map(|after| (value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, SkinType};
    use serde_json::json;

    fn profile() -> SkinProfile {
        SkinProfile {
            skin_type: SkinType::Combination,
            concerns: vec!["excess oil".to_string(), "redness".to_string()],
            age_range: AgeRange::From26To35,
        }
    }

    fn catalogue() -> Vec<Product> {
        serde_json::from_value(json!([
            {
                "id": "p1",
                "name": "Sérum Éclat",
                "category": "Soins",
                "subcategory": "Sérum",
                "skinType": "all",
                "ingredients": "Vitamin C, Water",
                "price": 34.5
            },
            {"id": "p2", "name": "Silk Headband", "category": "Accessories"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_profile_and_only_skincare_products() {
        let prompt = build_routine_prompt(&profile(), &catalogue()).unwrap();
        assert!(prompt.contains("Skin type: combination"));
        assert!(prompt.contains("Concerns: excess oil, redness"));
        assert!(prompt.contains("Age range: 26-35"));
        assert!(prompt.contains("ID: p1"));
        assert!(!prompt.contains("ID: p2"));
        assert!(!prompt.contains("{products}"));
    }

    #[test]
    fn test_product_block_layout() {
        let block = product_block(&catalogue()[0]);
        assert_eq!(
            block,
            "ID: p1\nName: Sérum Éclat\nCategory: Soins / Sérum\nSkin type: all\nConcerns: N/A\n\
            Ingredients: vitamin c, water\nDescription: N/A\nPrice: 34.50"
        );
    }

    #[test]
    fn test_no_skincare_products_yields_no_prompt() {
        let only_accessories = vec![catalogue().remove(1)];
        assert!(build_routine_prompt(&profile(), &only_accessories).is_none());
    }

    #[test]
    fn test_empty_concerns_are_stated_explicitly() {
        let mut p = profile();
        p.concerns.clear();
        let prompt = build_routine_prompt(&p, &catalogue()).unwrap();
        assert!(prompt.contains("Concerns: none reported"));
    }

    #[test]
    fn test_placeholder_text_in_concerns_is_not_expanded() {
        let mut p = profile();
        p.concerns = vec!["{products}".to_string(), "{age_range}".to_string()];
        let prompt = build_routine_prompt(&p, &catalogue()).unwrap();
        assert!(prompt.contains("Concerns: {products}, {age_range}"));
        assert_eq!(prompt.matches("ID: p1").count(), 1);
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template(r#"{"a": {x}} {y"#, &[("x", "1")]);
        assert_eq!(out, r#"{"a": 1} {y"#);
    }

    #[test]
    fn test_system_prompt_demands_json() {
        assert!(routine_system().contains("valid JSON only"));
    }
}
