use axum::{
    Extension,
    extract::{Path, State},
};
use nutriagent_core::domain::{conversation::entities::Message, session::ports::SessionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMessageResponse {
    pub data: Message,
}

#[utoipa::path(
    get,
    path = "/messages/{message_id}",
    tag = "chat",
    summary = "Get one message",
    description = "Used to poll a placeholder until its turn completes.",
    params(
        ("message_id" = Uuid, Path, description = "Message ID"),
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = GetMessageResponse),
        (status = 404, description = "Message not found")
    )
)]
pub async fn get_message(
    Path(message_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<GetMessageResponse>, ApiError> {
    let message = state
        .service
        .get_message(session.session_id, message_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMessageResponse { data: message }))
}
