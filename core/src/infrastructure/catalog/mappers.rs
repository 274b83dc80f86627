use crate::{
    domain::product::entities::{
        NO_INGREDIENTS_LISTED, NutrientLevel, NutrientLevels, NutriScore, ProductRecord,
        ProductSource,
    },
    infrastructure::catalog::dto::RawProduct,
};

const UNKNOWN_PRODUCT: &str = "Unknown Product";

fn present(value: Option<&String>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

fn localized_ingredients(raw: &RawProduct, language: &str) -> Option<String> {
    raw.extra
        .get(&format!("ingredients_text_{language}"))
        .and_then(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn nutrient_levels(raw: &RawProduct) -> Option<NutrientLevels> {
    let levels = raw.nutrient_levels.as_ref()?;
    let level = |key: &str| {
        levels
            .get(key)
            .and_then(|v| v.as_str())
            .and_then(NutrientLevel::parse)
    };

    Some(NutrientLevels {
        fat: level("fat"),
        salt: level("salt"),
        sugar: level("sugars"),
        saturated_fat: level("saturated-fat"),
    })
}

/// Pure mapping from a catalog entry to a `ProductRecord`
pub fn map_catalog_product(raw: &RawProduct, language: &str) -> ProductRecord {
    let ingredients = localized_ingredients(raw, language)
        .or_else(|| present(raw.ingredients_text.as_ref()))
        .unwrap_or_else(|| NO_INGREDIENTS_LISTED.to_string());

    ProductRecord {
        name: present(raw.product_name.as_ref()).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
        brand: present(raw.brands.as_ref()),
        ingredients,
        image_url: present(raw.image_front_small_url.as_ref())
            .or_else(|| present(raw.image_url.as_ref())),
        source: ProductSource::Catalog,
        nutri_score: raw.nutriscore_grade.as_deref().and_then(NutriScore::parse),
        nutrient_levels: nutrient_levels(raw),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_entry_mapping() {
        let product = raw(json!({
            "product_name": "Nutella",
            "brands": "Ferrero",
            "ingredients_text": "Zucker, Palmöl",
            "ingredients_text_en": "Sugar, palm oil, hazelnuts",
            "image_front_small_url": "https://images.example/small.jpg",
            "image_url": "https://images.example/full.jpg",
            "nutriscore_grade": "e",
            "nutrient_levels": {
                "fat": "high",
                "salt": "low",
                "sugars": "high",
                "saturated-fat": "high"
            }
        }));

        let record = map_catalog_product(&product, "en");

        assert_eq!(record.name, "Nutella");
        assert_eq!(record.brand.as_deref(), Some("Ferrero"));
        assert_eq!(record.ingredients, "Sugar, palm oil, hazelnuts");
        assert_eq!(record.image_url.as_deref(), Some("https://images.example/small.jpg"));
        assert_eq!(record.source, ProductSource::Catalog);
        assert_eq!(record.nutri_score, Some(NutriScore::E));

        let levels = record.nutrient_levels.unwrap();
        assert_eq!(levels.sugar, Some(NutrientLevel::High));
        assert_eq!(levels.saturated_fat, Some(NutrientLevel::High));
        assert_eq!(levels.salt, Some(NutrientLevel::Low));
    }

    #[test]
    fn test_sparse_entry_uses_defaults() {
        let product = raw(json!({
            "product_name": "",
            "ingredients_text_en": "   ",
            "image_url": "https://images.example/full.jpg",
            "nutriscore_grade": "unknown"
        }));

        let record = map_catalog_product(&product, "en");

        assert_eq!(record.name, UNKNOWN_PRODUCT);
        assert_eq!(record.ingredients, NO_INGREDIENTS_LISTED);
        assert_eq!(record.image_url.as_deref(), Some("https://images.example/full.jpg"));
        assert_eq!(record.nutri_score, None);
        assert_eq!(record.nutrient_levels, None);
    }

    #[test]
    fn test_language_preference_is_configurable() {
        let product = raw(json!({
            "ingredients_text": "fallback",
            "ingredients_text_fr": "Sucre, cacao"
        }));

        assert_eq!(map_catalog_product(&product, "fr").ingredients, "Sucre, cacao");
        assert_eq!(map_catalog_product(&product, "en").ingredients, "fallback");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let product = raw(json!({
            "product_name": "Coca-Cola",
            "ingredients_text": "Carbonated water, sugar",
            "nutrient_levels": { "sugars": "high", "fat": "bogus" }
        }));

        let first = map_catalog_product(&product, "en");
        let second = map_catalog_product(&product, "en");

        assert_eq!(first, second);
        assert_eq!(first.nutrient_levels.unwrap().fat, None);
    }
}
