use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{HttpClientConfig, LLMConfig, entities::app_errors::CoreError},
    llm::{
        ports::LLMClient,
        value_objects::{ApiCredential, ImagePart},
    },
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate, if any
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

        if text.trim().is_empty() { None } else { Some(text) }
    }
}

fn json_config(response_schema: serde_json::Value) -> Option<GenerationConfig> {
    Some(GenerationConfig {
        response_mime_type: JSON_MIME_TYPE.to_string(),
        response_schema,
    })
}

fn text_part(text: String) -> Part {
    Part::Text { text }
}

impl GeminiLLMClient {
    pub fn new(llm: &LLMConfig, http: &HttpClientConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(http.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            model_name: llm.gemini_model.clone(),
            base_url: llm.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(
        &self,
        credential: &ApiCredential,
        request: GeminiRequest,
    ) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                credential = %credential.fingerprint(),
                "Gemini API error: {} - {}", status, error_text
            );
            return Err(classify_error(status, &error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or(CoreError::EmptyBackendResponse)
    }
}

fn classify_error(status: StatusCode, body: &str) -> CoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::CredentialRejected,
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            CoreError::CredentialRejected
        }
        _ => CoreError::ExternalServiceError(format!(
            "LLM API returned error: {} - {}",
            status, body
        )),
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        credential: ApiCredential,
        system_instruction: Option<String>,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![text_part(prompt)],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![text_part(text)],
            }),
            generation_config: json_config(response_schema),
            tools: None,
        };

        self.call_gemini_api(&credential, request).await
    }

    async fn generate_with_image(
        &self,
        credential: ApiCredential,
        prompt: String,
        image: ImagePart,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image.data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: base64_image,
                        },
                    },
                    text_part(prompt),
                ],
            }],
            system_instruction: None,
            generation_config: json_config(response_schema),
            tools: None,
        };

        self.call_gemini_api(&credential, request).await
    }

    async fn generate_with_search(
        &self,
        credential: ApiCredential,
        prompt: String,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![text_part(prompt)],
            }],
            system_instruction: None,
            generation_config: None,
            tools: Some(vec![Tool {
                google_search: GoogleSearch {},
            }]),
        };

        self.call_gemini_api(&credential, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiLLMClient {
        let llm = LLMConfig {
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: server.uri(),
        };
        let http = HttpClientConfig {
            timeout: Duration::from_secs(5),
        };
        GeminiLLMClient::new(&llm, &http).unwrap()
    }

    fn key() -> ApiCredential {
        ApiCredential::new("AIza-test").unwrap()
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_json_mode_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "AIza-test"))
            .and(body_partial_json(json!({
                "system_instruction": { "parts": [{ "text": "be strict" }] },
                "generation_config": { "response_mime_type": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("{\"ok\":true}")))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_with_text(
                key(),
                Some("be strict".into()),
                "hello".into(),
                json!({"type": "object"}),
            )
            .await
            .unwrap();

        assert_eq!(result, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_image_is_sent_inline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "inline_data": { "mime_type": "image/png", "data": "AQID" } }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("{}")))
            .expect(1)
            .mount(&server)
            .await;

        let image = ImagePart::new(vec![1, 2, 3], Some("image/png".into()));
        let result = client_for(&server)
            .generate_with_image(key(), "look".into(), image, json!({}))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_enables_grounding_and_joins_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({ "tools": [{ "google_search": {} }] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Sugar, " }, { "text": "cocoa butter" }] }
                }]
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_with_search(key(), "find".into())
            .await
            .unwrap();

        assert_eq!(result, "Sugar, cocoa butter");
    }

    #[tokio::test]
    async fn test_missing_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_with_search(key(), "find".into())
            .await;

        assert_eq!(result, Err(CoreError::EmptyBackendResponse));
    }

    #[tokio::test]
    async fn test_invalid_key_is_credential_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT",
                    "details": [{ "reason": "API_KEY_INVALID" }]
                }
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_with_search(key(), "find".into())
            .await;

        assert_eq!(result, Err(CoreError::CredentialRejected));
    }

    #[tokio::test]
    async fn test_server_error_is_external_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_with_search(key(), "find".into())
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            classify_error(StatusCode::FORBIDDEN, ""),
            CoreError::CredentialRejected
        );
        assert_eq!(
            classify_error(StatusCode::UNAUTHORIZED, ""),
            CoreError::CredentialRejected
        );
        assert!(matches!(
            classify_error(StatusCode::BAD_REQUEST, "malformed schema"),
            CoreError::ExternalServiceError(_)
        ));
    }
}
