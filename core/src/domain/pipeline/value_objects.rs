use crate::domain::{
    llm::value_objects::{ApiCredential, ImagePart},
    session::entities::{SessionSettings, UserProfile},
};

pub const IMAGE_ONLY_USER_TEXT: &str = "Analyzed uploaded image";
pub const SCANNING_IMAGE_STEP: &str = "Scanning image...";
pub const ANALYZING_REQUEST_STEP: &str = "Analyzing your request...";
pub const PROFILE_CONDITION_LABEL: &str = "your personal profile";

/// Raw user submission for one turn
#[derive(Debug, Clone, Default)]
pub struct TurnRequest {
    pub text: Option<String>,
    pub image: Option<ImagePart>,
}

impl TurnRequest {
    pub fn new(text: Option<String>, image: Option<ImagePart>) -> Self {
        let text = text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self { text, image }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none()
    }

    pub fn user_text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| IMAGE_ONLY_USER_TEXT.to_string())
    }

    pub fn initial_step(&self) -> &'static str {
        if self.image.is_some() {
            SCANNING_IMAGE_STEP
        } else {
            ANALYZING_REQUEST_STEP
        }
    }
}

/// Session state captured when a turn is admitted; never re-read mid-turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub profile: Option<UserProfile>,
    pub credential: Option<ApiCredential>,
}

impl From<SessionSettings> for TurnSnapshot {
    fn from(settings: SessionSettings) -> Self {
        Self {
            profile: settings.profile,
            credential: settings.credential,
        }
    }
}
