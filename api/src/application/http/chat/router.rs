use super::handlers::{
    get_message::{__path_get_message, get_message},
    list_messages::{__path_list_messages, list_messages},
    submit_image_turn::{__path_submit_image_turn, submit_image_turn},
    submit_turn::{__path_submit_turn, MAX_IMAGE_SIZE, submit_turn},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(submit_turn, submit_image_turn, list_messages, get_message))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chat/turns", state.args.server.root_path),
            post(submit_turn),
        )
        .route(
            &format!("{}/chat/turns/image", state.args.server.root_path),
            post(submit_image_turn),
        )
        .route(
            &format!("{}/chat/messages", state.args.server.root_path),
            get(list_messages),
        )
        .route(
            &format!("{}/chat/messages/{{message_id}}", state.args.server.root_path),
            get(get_message),
        )
        // base64 inflates uploads by a third
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE * 2))
        .layer(middleware::from_fn(session_middleware))
}
