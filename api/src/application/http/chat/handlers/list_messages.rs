use axum::{Extension, extract::State};
use nutriagent_core::domain::{conversation::entities::Message, session::ports::SessionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListMessagesResponse {
    pub data: Vec<Message>,
}

#[utoipa::path(
    get,
    path = "/messages",
    tag = "chat",
    summary = "List the conversation",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = ListMessagesResponse)
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<ListMessagesResponse>, ApiError> {
    let messages = state
        .service
        .list_messages(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListMessagesResponse { data: messages }))
}
