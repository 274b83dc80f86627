use axum::{Extension, extract::State};
use nutriagent_core::domain::{
    common::entities::app_errors::CoreError, session::ports::SessionService,
};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        session::{
            handlers::get_session::{SessionResponse, load_session},
            validators::SaveCredentialRequest,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "/credential",
    tag = "session",
    summary = "Store the Gemini API key for this session",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    request_body = SaveCredentialRequest,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Blank key")
    )
)]
pub async fn save_credential(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SaveCredentialRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    state
        .service
        .save_credential(session.session_id.clone(), payload.api_key)
        .await
        .map_err(|e| match e {
            CoreError::Invalid => {
                ApiError::BadRequest("apiKey must not be blank".to_string())
            }
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(load_session(&state, session.session_id).await?))
}
