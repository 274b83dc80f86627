use serde_json::json;

/// Returns the JSON schema for safety consultation responses
pub fn get_health_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "verdict": {
                "type": "string",
                "enum": ["SAFE", "CAUTION", "AVOID"]
            },
            "summary": { "type": "string" },
            "keyConcerns": {
                "type": "array",
                "items": { "type": "string" }
            },
            "alternatives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["name", "reason"]
                }
            }
        },
        "required": ["verdict", "summary", "keyConcerns", "alternatives"]
    })
}
