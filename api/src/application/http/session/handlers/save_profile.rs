use axum::{Extension, extract::State};
use nutriagent_core::domain::{conversation::entities::Message, session::ports::SessionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        session::validators::SaveProfileRequest,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveProfileResponse {
    /// Agent confirmation appended to the conversation
    pub data: Message,
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "session",
    summary = "Save the health profile",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    request_body = SaveProfileRequest,
    responses(
        (status = 200, body = SaveProfileResponse)
    )
)]
pub async fn save_profile(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SaveProfileRequest>,
) -> Result<Response<SaveProfileResponse>, ApiError> {
    let message = state
        .service
        .save_profile(session.session_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveProfileResponse { data: message }))
}
