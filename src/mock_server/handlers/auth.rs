//! Signature verification, as the real service performs it.

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::mock_server::state::MockState;
use crate::signing::{compute_signature, AUTH_SCHEME, HTTP_DATE_FORMAT};

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// A required header is absent or not valid text.
    MissingHeader(&'static str),
    /// `Authorization` is not `ZXWS <connect_id>:<signature>`.
    MalformedAuthorization,
    /// The connect ID is not registered.
    UnknownConnectId,
    /// The signature does not match the request.
    BadSignature,
    /// The nonce was already used.
    ReplayedNonce,
    /// The `Date` header is unparseable or outside the accepted window.
    StaleDate,
}

impl AuthFailure {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) | Self::MalformedAuthorization => "1000",
            Self::UnknownConnectId => "1001",
            Self::BadSignature => "1002",
            Self::ReplayedNonce => "1003",
            Self::StaleDate => "1004",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingHeader(name) => format!("Missing header: {name}"),
            Self::MalformedAuthorization => "Malformed Authorization header".to_string(),
            Self::UnknownConnectId => "Unknown connect ID".to_string(),
            Self::BadSignature => "Invalid signature".to_string(),
            Self::ReplayedNonce => "Nonce already used".to_string(),
            Self::StaleDate => "Request date outside accepted window".to_string(),
        }
    }
}

impl IntoResponse for AuthFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": self.code(),
                "message": self.message(),
                "reason": "AUTHENTICATION_FAILED"
            })),
        )
            .into_response()
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, AuthFailure> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthFailure::MissingHeader(name))
}

/// Verify the authentication headers of a request to `path`.
///
/// Returns the nonce on success; the caller decides whether it was used.
pub fn verify(
    state: &MockState,
    method: &str,
    path: &str,
    headers: &HeaderMap,
) -> Result<String, AuthFailure> {
    let authorization = header(headers, "authorization")?;
    let date = header(headers, "date")?;
    let nonce = header(headers, "nonce")?;

    let credentials = authorization
        .strip_prefix(AUTH_SCHEME)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or(AuthFailure::MalformedAuthorization)?;
    let (connect_id, signature) = credentials
        .split_once(':')
        .ok_or(AuthFailure::MalformedAuthorization)?;

    let secret = state
        .secret_for(connect_id)
        .ok_or(AuthFailure::UnknownConnectId)?;

    let expected = compute_signature(method, path, date, nonce, secret)
        .map_err(|_| AuthFailure::BadSignature)?;
    if expected != signature {
        return Err(AuthFailure::BadSignature);
    }

    if let Some(max_skew) = state.max_clock_skew_secs {
        let sent = NaiveDateTime::parse_from_str(date, HTTP_DATE_FORMAT)
            .map_err(|_| AuthFailure::StaleDate)?;
        let skew = (Utc::now() - Utc.from_utc_datetime(&sent)).num_seconds().abs();
        if skew > max_skew {
            return Err(AuthFailure::StaleDate);
        }
    }

    Ok(nonce.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use chrono::Duration;

    use super::*;
    use crate::signing::{format_http_date, Credentials};

    fn signed_headers(connect_id: &str, secret: &str, path: &str, date: &str, nonce: &str) -> HeaderMap {
        let credentials = Credentials::new(connect_id, secret);
        let signature = credentials.sign("GET", path, date, nonce).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&credentials.authorization(&signature)).unwrap(),
        );
        headers.insert("date", HeaderValue::from_str(date).unwrap());
        headers.insert("nonce", HeaderValue::from_str(nonce).unwrap());
        headers
    }

    #[test]
    fn test_valid_signature_is_accepted() {
        let state = MockState::new().with_credentials("cid", "secret");
        let date = format_http_date(Utc::now());
        let headers = signed_headers("cid", "secret", "/adspaces", &date, "n1");

        assert_eq!(verify(&state, "GET", "/adspaces", &headers), Ok("n1".to_string()));
    }

    #[test]
    fn test_signature_for_other_path_is_rejected() {
        let state = MockState::new().with_credentials("cid", "secret");
        let date = format_http_date(Utc::now());
        let headers = signed_headers("cid", "secret", "/adspaces", &date, "n1");

        assert_eq!(
            verify(&state, "GET", "/programs", &headers),
            Err(AuthFailure::BadSignature)
        );
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let state = MockState::new().with_credentials("cid", "secret");
        let date = format_http_date(Utc::now());
        let headers = signed_headers("cid", "not-the-secret", "/adspaces", &date, "n1");

        assert_eq!(
            verify(&state, "GET", "/adspaces", &headers),
            Err(AuthFailure::BadSignature)
        );
    }

    #[test]
    fn test_unknown_connect_id_is_rejected() {
        let state = MockState::new();
        let date = format_http_date(Utc::now());
        let headers = signed_headers("cid", "secret", "/adspaces", &date, "n1");

        assert_eq!(
            verify(&state, "GET", "/adspaces", &headers),
            Err(AuthFailure::UnknownConnectId)
        );
    }

    #[test]
    fn test_missing_nonce_is_rejected() {
        let state = MockState::new().with_credentials("cid", "secret");
        let date = format_http_date(Utc::now());
        let mut headers = signed_headers("cid", "secret", "/adspaces", &date, "n1");
        headers.remove("nonce");

        assert_eq!(
            verify(&state, "GET", "/adspaces", &headers),
            Err(AuthFailure::MissingHeader("nonce"))
        );
    }

    #[test]
    fn test_stale_date_is_rejected() {
        let state = MockState::new()
            .with_credentials("cid", "secret")
            .with_max_clock_skew(300);
        let date = format_http_date(Utc::now() - Duration::hours(2));
        let headers = signed_headers("cid", "secret", "/adspaces", &date, "n1");

        assert_eq!(
            verify(&state, "GET", "/adspaces", &headers),
            Err(AuthFailure::StaleDate)
        );
    }
}
