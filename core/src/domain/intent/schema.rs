use serde_json::json;

/// Returns the JSON schema for intent extraction responses
pub fn get_intent_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string", "nullable": true },
            "healthCondition": { "type": "string", "nullable": true },
            "isRelevant": { "type": "boolean" }
        },
        "required": ["isRelevant"]
    })
}

/// Returns the JSON schema for image identification responses
pub fn get_image_identification_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "barcode": { "type": "string", "nullable": true },
            "productName": { "type": "string", "nullable": true }
        }
    })
}
