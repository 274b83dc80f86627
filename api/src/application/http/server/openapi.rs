use crate::application::http::{
    chat::router::ChatApiDoc, health::__path_health, session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriAgent API"
    ),
    paths(health),
    nest(
        (path = "/chat", api = ChatApiDoc),
        (path = "/session", api = SessionApiDoc),
    )
)]
pub struct ApiDoc;
