use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use nutriagent_core::domain::session::entities::DEFAULT_SESSION_ID;

pub const SESSION_HEADER: &str = "x-session-id";
const MAX_SESSION_ID_LEN: usize = 128;

/// Session identity stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: String,
}

/// Resolves the caller's session from the `X-Session-Id` header; callers
/// without one share the default session
pub async fn session_middleware(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let session_id = match req.headers().get(SESSION_HEADER) {
        Some(value) => {
            let value = value
                .to_str()
                .map_err(|_| StatusCode::BAD_REQUEST)?
                .trim();
            if value.is_empty() || value.len() > MAX_SESSION_ID_LEN {
                tracing::warn!("Rejected malformed session header");
                return Err(StatusCode::BAD_REQUEST);
            }
            value.to_string()
        }
        None => DEFAULT_SESSION_ID.to_string(),
    };

    req.extensions_mut().insert(SessionContext { session_id });

    Ok(next.run(req).await)
}
