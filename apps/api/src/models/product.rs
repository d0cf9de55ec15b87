use serde::{Deserialize, Deserializer, Serialize};

/// Catalogue entry as supplied by the storefront. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub concerns: Option<String>,
    #[serde(default)]
    pub ingredients: Ingredients,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Lower-cased `category` and `subcategory`, space-joined. Step classification runs on this.
    pub fn category_text(&self) -> String {
        [self.category.as_deref(), self.subcategory.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Human-readable `category / subcategory`, used in prompts.
    pub fn category_label(&self) -> String {
        match (self.category.as_deref(), self.subcategory.as_deref()) {
            (Some(c), Some(s)) => format!("{c} / {s}"),
            (Some(c), None) => c.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => "N/A".to_string(),
        }
    }
}

/// Canonical ingredient list: trimmed, lower-cased tokens in source order.
///
/// The storefront sends either `"Niacinamide, Aloe"` or `["Niacinamide", "Aloe"]`;
/// both deserialize to the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ingredients(Vec<String>);

impl Ingredients {
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(text.split(','))
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `needle` (already lower-cased) occurs inside any token.
    pub fn mentions(&self, needle: &str) -> bool {
        self.0.iter().any(|t| t.contains(needle))
    }
}

impl<'de> Deserialize<'de> for Ingredients {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            List(Vec<String>),
            Missing(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Ingredients::from_text(&text),
            Raw::List(list) => Ingredients::from_tokens(list),
            Raw::Missing(()) => Ingredients::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_list_ingredients_normalize_identically() {
        let from_text: Ingredients = serde_json::from_value(json!("Niacinamide, Aloe")).unwrap();
        let from_list: Ingredients =
            serde_json::from_value(json!(["Niacinamide", "Aloe"])).unwrap();
        assert_eq!(from_text, from_list);
        assert_eq!(from_text.tokens(), ["niacinamide", "aloe"]);
    }

    #[test]
    fn test_null_ingredients_are_empty() {
        let ingredients: Ingredients = serde_json::from_value(json!(null)).unwrap();
        assert!(ingredients.is_empty());
    }

    #[test]
    fn test_product_with_only_required_fields_deserializes() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "name": "Plain Cream"
        }))
        .unwrap();
        assert!(product.skin_type.is_none());
        assert!(product.ingredients.is_empty());
        assert_eq!(product.price, 0.0);
        assert_eq!(product.category_text(), "");
    }

    #[test]
    fn test_category_text_joins_and_lowercases() {
        let product: Product = serde_json::from_value(json!({
            "id": "p2",
            "name": "Gel Nettoyant",
            "category": "Soins",
            "subcategory": "Nettoyant"
        }))
        .unwrap();
        assert_eq!(product.category_text(), "soins nettoyant");
        assert_eq!(product.category_label(), "Soins / Nettoyant");
    }

    #[test]
    fn test_mentions_matches_inside_tokens() {
        let ingredients = Ingredients::from_text("Water, Sodium Hyaluronate, Hyaluronic Acid");
        assert!(ingredients.mentions("hyaluronic"));
        assert!(!ingredients.mentions("retinol"));
    }
}
