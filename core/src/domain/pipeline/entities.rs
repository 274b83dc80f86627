use crate::domain::{
    common::entities::app_errors::CoreError,
    consultation::entities::HealthAnalysis,
    conversation::entities::{Message, TurnHandle},
    llm::value_objects::{ApiCredential, ImagePart},
    product::entities::ProductRecord,
    session::entities::UserProfile,
};

pub const IMAGE_UNCLEAR_TEXT: &str = "I couldn't identify a clear barcode or product name in that image. Please try again or type the product name.";
pub const NO_PRODUCT_TEXT: &str = "I couldn't find any product matching your request. Please try providing a valid product name, barcode number, or clear image.";
pub const MISSING_CREDENTIAL_TEXT: &str = "Missing API Key. Please configure it in the settings.";
pub const SYSTEM_ERROR_TEXT: &str = "I encountered a system error. Please check your connection or API key and try again.";

/// A turn that passed the entry guard and owns the session's slot
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub handle: TurnHandle,
    pub placeholder: Message,
    pub text: Option<String>,
    pub image: Option<ImagePart>,
    pub credential: ApiCredential,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    ImageUnclear,
    NoProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Credential,
    System,
}

impl From<&CoreError> for FailureKind {
    fn from(error: &CoreError) -> Self {
        if error.is_credential_related() {
            FailureKind::Credential
        } else {
            FailureKind::System
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Success {
        product: ProductRecord,
        analysis: HealthAnalysis,
        condition_label: String,
    },
    NotFound(NotFoundReason),
    Failed(FailureKind),
}

impl TurnOutcome {
    pub fn text(&self) -> String {
        match self {
            TurnOutcome::Success {
                product,
                condition_label,
                ..
            } => format!(
                "I've analyzed **{}** for **{}**.",
                product.name, condition_label
            ),
            TurnOutcome::NotFound(NotFoundReason::ImageUnclear) => IMAGE_UNCLEAR_TEXT.to_string(),
            TurnOutcome::NotFound(NotFoundReason::NoProduct) => NO_PRODUCT_TEXT.to_string(),
            TurnOutcome::Failed(FailureKind::Credential) => MISSING_CREDENTIAL_TEXT.to_string(),
            TurnOutcome::Failed(FailureKind::System) => SYSTEM_ERROR_TEXT.to_string(),
        }
    }

    /// Completes `placeholder` with this outcome
    pub fn into_message(self, placeholder: Message) -> Message {
        let text = self.text();
        match self {
            TurnOutcome::Success {
                product, analysis, ..
            } => placeholder.complete(text, Some(product), Some(analysis)),
            _ => placeholder.complete(text, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_classification() {
        assert_eq!(
            FailureKind::from(&CoreError::CredentialRejected),
            FailureKind::Credential
        );
        assert_eq!(
            FailureKind::from(&CoreError::MissingCredential),
            FailureKind::Credential
        );
        assert_eq!(
            FailureKind::from(&CoreError::SchemaViolation("x".into())),
            FailureKind::System
        );
        assert_eq!(
            FailureKind::from(&CoreError::EmptyBackendResponse),
            FailureKind::System
        );
    }

    #[test]
    fn test_not_found_message_has_no_payload() {
        let placeholder = Message::placeholder("Scanning image...");
        let message = TurnOutcome::NotFound(NotFoundReason::ImageUnclear).into_message(placeholder);

        assert_eq!(message.text, IMAGE_UNCLEAR_TEXT);
        assert!(message.product_data.is_none());
        assert!(message.analysis.is_none());
        assert!(!message.is_thinking);
    }
}
