use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::{ApiCredential, ImagePart},
};

/// LLM Client trait for calling generative models
///
/// Every method returns the raw text payload of the first candidate, or
/// `CoreError::EmptyBackendResponse` when the backend produced none.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// JSON-mode call constrained by `response_schema`
    fn generate_with_text(
        &self,
        credential: ApiCredential,
        system_instruction: Option<String>,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// JSON-mode call with an inline image part
    fn generate_with_image(
        &self,
        credential: ApiCredential,
        prompt: String,
        image: ImagePart,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Free-text call with web search grounding enabled
    fn generate_with_search(
        &self,
        credential: ApiCredential,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
