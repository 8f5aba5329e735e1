use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use katla_core::UserId;

use crate::app::errors;
use crate::context::{RequestId, RequestUser};

pub const USER_HEADER: &str = "x-user-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy)]
pub struct UserState {
    pub default_user: UserId,
}

/// Resolve the acting user and attach a request id + tracing span.
pub async fn request_context_middleware(
    State(state): State<UserState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let user = match extract_user(req.headers()) {
        Ok(Some(user)) => user,
        Ok(None) => state.default_user,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_user", msg),
    };

    let request_id = RequestId::new();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %req.method(),
        path = %req.uri().path(),
        user_id = %user,
    );

    req.extensions_mut().insert(RequestUser::new(user));
    req.extensions_mut().insert(request_id);

    let mut res = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.0.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

fn extract_user(headers: &HeaderMap) -> Result<Option<UserId>, String> {
    let Some(header) = headers.get(USER_HEADER) else {
        return Ok(None);
    };

    let value = header
        .to_str()
        .map_err(|_| format!("{USER_HEADER} must be ASCII"))?;

    value
        .parse::<UserId>()
        .map(Some)
        .map_err(|e| e.to_string())
}
