use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ingredient text used when the catalog entry carries none
pub const NO_INGREDIENTS_LISTED: &str = "No ingredients listed in database.";

/// Ingredient text used when a web search produced no answer
pub const NO_INGREDIENTS_FOUND: &str = "No ingredients found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub ingredients: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub source: ProductSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutri_score: Option<NutriScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_levels: Option<NutrientLevels>,
}

impl ProductRecord {
    /// Record assembled from a web search answer
    pub fn from_web_search(name: String, ingredients: String) -> Self {
        let ingredients = if ingredients.trim().is_empty() {
            NO_INGREDIENTS_FOUND.to_string()
        } else {
            ingredients
        };

        Self {
            name,
            brand: None,
            ingredients,
            image_url: None,
            source: ProductSource::WebSearch,
            nutri_score: None,
            nutrient_levels: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProductSource {
    Catalog,
    WebSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NutriScore {
    A,
    B,
    C,
    D,
    E,
}

impl NutriScore {
    /// Only the five letter grades are accepted; catalog placeholders such
    /// as "unknown" or "not-applicable" yield `None`.
    pub fn parse(grade: &str) -> Option<Self> {
        match grade.trim().to_ascii_lowercase().as_str() {
            "a" => Some(NutriScore::A),
            "b" => Some(NutriScore::B),
            "c" => Some(NutriScore::C),
            "d" => Some(NutriScore::D),
            "e" => Some(NutriScore::E),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NutrientLevel {
    Low,
    Moderate,
    High,
}

impl NutrientLevel {
    pub fn parse(level: &str) -> Option<Self> {
        match level {
            "low" => Some(NutrientLevel::Low),
            "moderate" => Some(NutrientLevel::Moderate),
            "high" => Some(NutrientLevel::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutrientLevels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<NutrientLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<NutrientLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<NutrientLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<NutrientLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutri_score_parse() {
        assert_eq!(NutriScore::parse("a"), Some(NutriScore::A));
        assert_eq!(NutriScore::parse("E"), Some(NutriScore::E));
        assert_eq!(NutriScore::parse("unknown"), None);
        assert_eq!(NutriScore::parse("not-applicable"), None);
    }

    #[test]
    fn test_web_search_record_never_has_empty_ingredients() {
        let record = ProductRecord::from_web_search("Snickers".into(), "  ".into());
        assert_eq!(record.ingredients, NO_INGREDIENTS_FOUND);
        assert_eq!(record.source, ProductSource::WebSearch);
    }

    #[test]
    fn test_record_serializes_in_camel_case() {
        let record = ProductRecord {
            name: "Coca-Cola".into(),
            brand: Some("Coca-Cola".into()),
            ingredients: "Carbonated water, sugar".into(),
            image_url: None,
            source: ProductSource::Catalog,
            nutri_score: Some(NutriScore::E),
            nutrient_levels: Some(NutrientLevels {
                sugar: Some(NutrientLevel::High),
                saturated_fat: Some(NutrientLevel::Low),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nutriScore"], "e");
        assert_eq!(json["source"], "Catalog");
        assert_eq!(json["nutrientLevels"]["saturatedFat"], "low");
        assert!(json.get("imageUrl").is_none());
    }
}
