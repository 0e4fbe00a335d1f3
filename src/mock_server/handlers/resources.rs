//! Resource endpoint handler.
//!
//! Every API path is served by one fallback handler: authenticate, record,
//! then look the path up in the state.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::auth::{self, AuthFailure};
use crate::mock_server::state::{MockState, RecordedRequest};

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "code": code,
            "message": message
        })),
    )
        .into_response()
}

/// GET /{resource path}
pub async fn serve_resource(
    State(state): State<Arc<RwLock<MockState>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "405",
            format!("{method} is not supported"),
        );
    }

    let path = uri.path().to_string();
    let mut state = state.write().await;

    let nonce = match auth::verify(&state, method.as_str(), &path, &headers) {
        Ok(nonce) => nonce,
        Err(failure) => return failure.into_response(),
    };
    if !state.consume_nonce(&nonce) {
        return AuthFailure::ReplayedNonce.into_response();
    }

    state.requests.push(RecordedRequest {
        path: path.clone(),
        query: uri.query().map(str::to_string),
        nonce,
    });

    if let Some(raw) = state.raw_responses.get(&path) {
        let status = StatusCode::from_u16(raw.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, raw.body.clone()).into_response();
    }

    match state.resources.get(&path) {
        Some(body) => (StatusCode::OK, Json(body.clone())).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            "404",
            format!("No resource at {path}"),
        ),
    }
}
