use super::handlers::{
    accept_disclaimer::{__path_accept_disclaimer, accept_disclaimer},
    get_session::{__path_get_session, get_session},
    save_credential::{__path_save_credential, save_credential},
    save_profile::{__path_save_profile, save_profile},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_session, save_profile, save_credential, accept_disclaimer))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            get(get_session),
        )
        .route(
            &format!("{}/session/profile", state.args.server.root_path),
            put(save_profile),
        )
        .route(
            &format!("{}/session/credential", state.args.server.root_path),
            put(save_credential),
        )
        .route(
            &format!("{}/session/disclaimer", state.args.server.root_path),
            post(accept_disclaimer),
        )
        .layer(middleware::from_fn(session_middleware))
}
