use axum::{Extension, extract::State};
use base64::{Engine as _, engine::general_purpose};
use nutriagent_core::domain::{
    conversation::entities::Message,
    llm::value_objects::ImagePart,
    pipeline::{ports::PipelineService, value_objects::TurnRequest},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        chat::validators::SubmitTurnRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitTurnResponse {
    /// Placeholder message; poll it until `isThinking` is false
    pub data: Message,
}

/// Splits an optional `data:<mime>;base64,` prefix off the payload
fn decode_image(encoded: &str, mime_type: Option<String>) -> Result<ImagePart, ApiError> {
    let (mime_type, payload) = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| ApiError::BadRequest("Malformed image data URL".to_string()))?;
            let mime = header.trim_end_matches(";base64").to_string();
            (Some(mime), payload)
        }
        None => (mime_type, encoded),
    };

    let data = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ApiError::BadRequest(format!("Invalid base64 image: {}", e)))?;

    if data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(ImagePart::new(data, mime_type))
}

/// Admits the turn and runs it on a background task
pub async fn dispatch_turn(
    state: &AppState,
    session_id: String,
    request: TurnRequest,
) -> Result<Message, ApiError> {
    let pending = state
        .service
        .start_turn(session_id, request)
        .await
        .map_err(ApiError::from)?;
    let placeholder = pending.placeholder.clone();

    let service = state.service.clone();
    tokio::spawn(async move {
        if let Err(e) = service.run_turn(pending).await {
            tracing::error!("Failed to complete turn: {}", e);
        }
    });

    Ok(placeholder)
}

#[utoipa::path(
    post,
    path = "/turns",
    tag = "chat",
    summary = "Submit a chat turn",
    description = "Starts analysing a text query, barcode or base64 image. Returns the placeholder agent message that is completed in the background.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    request_body = SubmitTurnRequest,
    responses(
        (status = 202, body = SubmitTurnResponse),
        (status = 400, description = "Empty or malformed request"),
        (status = 409, description = "A turn is already in progress"),
        (status = 428, description = "No API key configured")
    )
)]
pub async fn submit_turn(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SubmitTurnRequest>,
) -> Result<Response<SubmitTurnResponse>, ApiError> {
    let image = payload
        .image_base64
        .as_deref()
        .filter(|encoded| !encoded.trim().is_empty())
        .map(|encoded| decode_image(encoded, payload.image_mime_type.clone()))
        .transpose()?;

    let placeholder =
        dispatch_turn(&state, session.session_id, TurnRequest::new(payload.text, image)).await?;

    Ok(Response::Accepted(SubmitTurnResponse { data: placeholder }))
}
