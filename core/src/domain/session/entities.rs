use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::llm::value_objects::ApiCredential;

/// Session used when a caller does not identify itself
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub conditions: String,
    pub goals: String,
    pub lifestyle: String,
}

impl UserProfile {
    /// Agent reply appended to the conversation after a profile save
    pub fn confirmation_text(&self) -> String {
        let conditions = match self.conditions.trim() {
            "" => "General Health",
            c => c,
        };

        match self.goals.trim() {
            "" => format!("Profile updated! I will now tailor my advice for: {conditions}."),
            goals => format!(
                "Profile updated! I will now tailor my advice for: {conditions} and your goal to {goals}."
            ),
        }
    }
}

/// Everything a session has stored, read once at the start of a turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSettings {
    pub profile: Option<UserProfile>,
    pub credential: Option<ApiCredential>,
    pub disclaimer_accepted: bool,
    /// Set when a turn needed a credential the session could not supply
    pub credential_prompt_pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_defaults_to_general_health() {
        let profile = UserProfile::default();
        assert_eq!(
            profile.confirmation_text(),
            "Profile updated! I will now tailor my advice for: General Health."
        );
    }

    #[test]
    fn test_confirmation_mentions_goals() {
        let profile = UserProfile {
            name: "Ana".into(),
            conditions: "Type 2 Diabetes".into(),
            goals: "lose weight".into(),
            lifestyle: String::new(),
        };
        assert_eq!(
            profile.confirmation_text(),
            "Profile updated! I will now tailor my advice for: Type 2 Diabetes and your goal to lose weight."
        );
    }

    #[test]
    fn test_profile_accepts_partial_payload() {
        let profile: UserProfile = serde_json::from_str(r#"{"conditions":"GERD"}"#).unwrap();
        assert_eq!(profile.conditions, "GERD");
        assert!(profile.name.is_empty());
    }
}
