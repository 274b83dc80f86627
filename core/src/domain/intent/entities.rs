use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::value_objects::looks_like_barcode;

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// What the user asked about in a free-text turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Intent {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub health_condition: Option<String>,
    pub is_relevant: bool,
}

impl Intent {
    pub fn normalized(self) -> Self {
        Self {
            product_name: non_blank(self.product_name),
            health_condition: non_blank(self.health_condition),
            is_relevant: self.is_relevant,
        }
    }
}

/// What the vision backend read off a product photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageIdentification {
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl ImageIdentification {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Barcodes that are not plain digit strings are dropped
    pub fn normalized(self) -> Self {
        let barcode = non_blank(self.barcode).filter(|code| {
            let valid = looks_like_barcode(code);
            if !valid {
                tracing::warn!(barcode = %code, "Discarding non-numeric barcode from image");
            }
            valid
        });

        Self {
            barcode,
            product_name: non_blank(self.product_name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.barcode.is_none() && self.product_name.is_none()
    }
}
