use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, consultation::entities::HealthAnalysis,
    product::entities::ProductRecord,
};

pub const THINKING_TEXT: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageRole {
    User,
    Agent,
}

/// One entry of a session's conversation.
///
/// A placeholder (`is_thinking == true`) is completed in place exactly
/// once, keeping its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_data: Option<ProductRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<HealthAnalysis>,
    pub is_thinking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_step: Option<String>,
}

impl Message {
    fn new(role: MessageRole, text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            role,
            text,
            timestamp: now,
            product_data: None,
            analysis: None,
            is_thinking: false,
            thinking_step: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text.into())
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Agent, text.into())
    }

    pub fn placeholder(step: impl Into<String>) -> Self {
        let mut message = Self::new(MessageRole::Agent, THINKING_TEXT.to_string());
        message.is_thinking = true;
        message.thinking_step = Some(step.into());
        message
    }

    /// Terminal form of a placeholder; the thinking step is dropped
    pub fn complete(
        self,
        text: String,
        product_data: Option<ProductRecord>,
        analysis: Option<HealthAnalysis>,
    ) -> Self {
        Self {
            text,
            product_data,
            analysis,
            is_thinking: false,
            thinking_step: None,
            ..self
        }
    }
}

/// Addresses the placeholder of one admitted turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnHandle {
    pub session_id: String,
    pub message_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_keeps_identity() {
        let placeholder = Message::placeholder("Scanning image...");
        let id = placeholder.id;
        let timestamp = placeholder.timestamp;

        let done = placeholder.complete("Done".into(), None, None);

        assert_eq!(done.id, id);
        assert_eq!(done.timestamp, timestamp);
        assert!(!done.is_thinking);
        assert_eq!(done.thinking_step, None);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Message::placeholder("Analyzing your request...")).unwrap();

        assert_eq!(value["role"], "AGENT");
        assert_eq!(value["text"], THINKING_TEXT);
        assert_eq!(value["isThinking"], true);
        assert_eq!(value["thinkingStep"], "Analyzing your request...");
        assert!(value.get("productData").is_none());
    }
}
