use axum::{Extension, extract::State};
use nutriagent_core::domain::session::ports::SessionService;

use crate::application::{
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        session::handlers::get_session::{SessionResponse, load_session},
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    post,
    path = "/disclaimer",
    tag = "session",
    summary = "Record acceptance of the medical disclaimer",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = SessionResponse)
    )
)]
pub async fn accept_disclaimer(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<SessionResponse>, ApiError> {
    state
        .service
        .accept_disclaimer(session.session_id.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(load_session(&state, session.session_id).await?))
}
