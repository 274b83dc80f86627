use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTurnRequest {
    #[validate(length(max = 5000, message = "text must be at most 5000 characters"))]
    pub text: Option<String>,
    /// Raw base64 or a `data:image/...;base64,` URL
    pub image_base64: Option<String>,
    /// Ignored when `imageBase64` is a data URL
    pub image_mime_type: Option<String>,
}
