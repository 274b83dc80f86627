use axum::{Extension, extract::State};
use nutriagent_core::domain::session::{
    entities::{SessionSettings, UserProfile},
    ports::SessionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

/// Session settings as exposed to clients; the key itself never leaves
/// the server
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub profile: Option<UserProfile>,
    pub has_credential: bool,
    pub credential_fingerprint: Option<String>,
    pub disclaimer_accepted: bool,
    /// Client should open its API key dialog
    pub credential_prompt_pending: bool,
}

impl SessionResponse {
    pub fn new(session_id: String, settings: SessionSettings) -> Self {
        Self {
            session_id,
            has_credential: settings.credential.is_some(),
            credential_fingerprint: settings.credential.as_ref().map(|c| c.fingerprint()),
            profile: settings.profile,
            disclaimer_accepted: settings.disclaimer_accepted,
            credential_prompt_pending: settings.credential_prompt_pending,
        }
    }
}

pub async fn load_session(state: &AppState, session_id: String) -> Result<SessionResponse, ApiError> {
    let settings = state
        .service
        .get_settings(session_id.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(SessionResponse::new(session_id, settings))
}

#[utoipa::path(
    get,
    path = "",
    tag = "session",
    summary = "Get session settings",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = SessionResponse)
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<SessionResponse>, ApiError> {
    Ok(Response::OK(load_session(&state, session.session_id).await?))
}
