use axum::{
    Extension,
    extract::{Multipart, State},
};
use nutriagent_core::domain::{llm::value_objects::ImagePart, pipeline::value_objects::TurnRequest};

use crate::application::{
    http::{
        chat::handlers::submit_turn::{MAX_IMAGE_SIZE, SubmitTurnResponse, dispatch_turn},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    post,
    path = "/turns/image",
    tag = "chat",
    summary = "Submit a chat turn with an uploaded photo",
    description = "Multipart form with an `image` file and an optional `text` field.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 202, body = SubmitTurnResponse),
        (status = 400, description = "Missing or oversized image"),
        (status = 409, description = "A turn is already in progress"),
        (status = 428, description = "No API key configured")
    )
)]
pub async fn submit_image_turn(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    mut multipart: Multipart,
) -> Result<Response<SubmitTurnResponse>, ApiError> {
    let mut text: Option<String> = None;
    let mut image: Option<ImagePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "text" => {
                text = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read text: {}", e))
                })?);
            }
            "image" => {
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(ImagePart::new(data.to_vec(), mime_type));
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let placeholder =
        dispatch_turn(&state, session.session_id, TurnRequest::new(text, Some(image))).await?;

    Ok(Response::Accepted(SubmitTurnResponse { data: placeholder }))
}
