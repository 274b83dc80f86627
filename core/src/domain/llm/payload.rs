use serde::de::DeserializeOwned;

use crate::domain::common::entities::app_errors::CoreError;

/// Strictly decodes a structured-output payload into its declared shape.
///
/// Any deviation (malformed JSON, wrong types, unknown fields when the
/// target denies them) is a schema violation; nothing is coerced.
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "Structured payload does not match schema");
        CoreError::SchemaViolation(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Probe {
        #[allow(dead_code)]
        flag: bool,
    }

    #[test]
    fn test_decode_rejects_deviations() {
        assert!(decode_payload::<Probe>(r#"{"flag": true}"#).is_ok());
        assert!(matches!(
            decode_payload::<Probe>(r#"{"flag": "yes"}"#),
            Err(CoreError::SchemaViolation(_))
        ));
        assert!(matches!(
            decode_payload::<Probe>(r#"{"flag": true, "extra": 1}"#),
            Err(CoreError::SchemaViolation(_))
        ));
        assert!(matches!(
            decode_payload::<Probe>("not json"),
            Err(CoreError::SchemaViolation(_))
        ));
    }
}
