use nutriagent_core::domain::session::entities::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveProfileRequest {
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = 2000, message = "conditions must be at most 2000 characters"))]
    #[serde(default)]
    pub conditions: String,
    #[validate(length(max = 2000, message = "goals must be at most 2000 characters"))]
    #[serde(default)]
    pub goals: String,
    #[validate(length(max = 2000, message = "lifestyle must be at most 2000 characters"))]
    #[serde(default)]
    pub lifestyle: String,
}

impl From<SaveProfileRequest> for UserProfile {
    fn from(request: SaveProfileRequest) -> Self {
        Self {
            name: request.name,
            conditions: request.conditions,
            goals: request.goals,
            lifestyle: request.lifestyle,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveCredentialRequest {
    #[validate(length(min = 1, max = 512, message = "apiKey must be between 1 and 512 characters"))]
    pub api_key: String,
}
