use std::collections::HashMap;

use serde::Deserialize;

/// Product entry as served by the catalog; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub ingredients_text: Option<String>,
    pub image_front_small_url: Option<String>,
    pub image_url: Option<String>,
    pub nutriscore_grade: Option<String>,
    pub nutrient_levels: Option<HashMap<String, serde_json::Value>>,
    /// Holds the per-language `ingredients_text_<lang>` fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct BarcodeResponse {
    pub status: Option<i64>,
    pub product: Option<RawProduct>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<RawProduct>,
}
