//! Authenticated request assembly and query-string construction.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, DATE};

use crate::error::{Result, ZanoxError};
use crate::signing::{format_http_date, generate_nonce, Credentials};

/// Name of the header carrying the request nonce.
pub const NONCE_HEADER: &str = "nonce";

/// HTTP method for every request this client issues.
pub const GET: &str = "GET";

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl TryFrom<serde_json::Value> for ParamValue {
    type Error = ZanoxError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Self::Str(s)),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Self::Int(i)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| ZanoxError::InvalidParam(format!("unsupported number {n}"))),
            },
            other => Err(ZanoxError::InvalidParam(format!(
                "filter values must be scalars, got {other}"
            ))),
        }
    }
}

/// Filter parameters for a request, kept in insertion order.
///
/// Keys are passed through to the service uninterpreted. Inserting a key
/// that is already present replaces its value without moving it.
///
/// ```
/// use zanoxapi::QueryParams;
///
/// let params = QueryParams::new()
///     .with("region", "DE")
///     .with("items", 50)
///     .with("hasimages", true);
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the parameters as `key=value` pairs joined by `&`, each
    /// key and value percent-encoded on its own.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for QueryParams {
    type Error = ZanoxError;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut params = Self::new();
        for (key, value) in map {
            let value = ParamValue::try_from(value)
                .map_err(|e| ZanoxError::InvalidParam(format!("'{key}': {e}")))?;
            params.insert(key, value);
        }
        Ok(params)
    }
}

/// Append `params` to `base_url` as a query string.
///
/// An empty parameter set leaves `base_url` untouched. When `base_url`
/// already carries a query, the new pairs are joined to it with `&`.
pub fn build_query_url(base_url: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return base_url.to_string();
    }

    let separator = if !base_url.contains('?') {
        "?"
    } else if base_url.ends_with('?') || base_url.ends_with('&') {
        ""
    } else {
        "&"
    };

    format!("{base_url}{separator}{}", params.to_query_string())
}

/// A transport-ready authenticated GET request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Complete target URL including any query string.
    pub url: String,
    /// `Authorization`, `Date` and `nonce` headers.
    pub headers: HeaderMap,
    /// Per-call timeout, if any; overrides the transport default.
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    /// Attach a per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> Option<&str> {
        self.header(AUTHORIZATION.as_str())
    }

    /// The `Date` header value.
    pub fn date(&self) -> Option<&str> {
        self.header(DATE.as_str())
    }

    /// The `nonce` header value.
    pub fn nonce(&self) -> Option<&str> {
        self.header(NONCE_HEADER)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Build an authenticated GET for `full_url`, signing `uri_path`.
///
/// Captures the current time and a fresh nonce; nothing is reused
/// between calls.
///
/// # Errors
///
/// Returns an error if signing fails or the connect ID cannot be sent
/// as a header value.
pub fn build_authenticated_get(
    credentials: &Credentials,
    full_url: &str,
    uri_path: &str,
) -> Result<RequestDescriptor> {
    build_authenticated_get_at(credentials, full_url, uri_path, Utc::now(), generate_nonce())
}

/// Like [`build_authenticated_get`], with the instant and nonce supplied.
///
/// # Errors
///
/// Returns an error if signing fails or a header value is invalid.
pub fn build_authenticated_get_at(
    credentials: &Credentials,
    full_url: &str,
    uri_path: &str,
    now: DateTime<Utc>,
    nonce: String,
) -> Result<RequestDescriptor> {
    let timestamp = format_http_date(now);
    let signature = credentials.sign(GET, uri_path, &timestamp, &nonce)?;

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&credentials.authorization(&signature))?,
    );
    headers.insert(DATE, HeaderValue::from_str(&timestamp)?);
    headers.insert(
        HeaderName::from_static(NONCE_HEADER),
        HeaderValue::from_str(&nonce)?,
    );

    Ok(RequestDescriptor {
        url: full_url.to_string(),
        headers,
        timeout: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};

    use super::*;
    use crate::signing::{compute_signature, HTTP_DATE_FORMAT};

    #[test]
    fn test_query_url_percent_encodes_values() {
        let params = QueryParams::new().with("a", "1 2").with("b", "c&d");
        assert_eq!(
            build_query_url("https://x/y", &params),
            "https://x/y?a=1%202&b=c%26d"
        );
    }

    #[test]
    fn test_query_url_encodes_keys() {
        let params = QueryParams::new().with("a key", "v");
        assert_eq!(build_query_url("https://x/y", &params), "https://x/y?a%20key=v");
    }

    #[test]
    fn test_query_url_joins_existing_query_with_ampersand() {
        let params = QueryParams::new().with("a", "1");
        assert_eq!(
            build_query_url("https://x/y?z=1", &params),
            "https://x/y?z=1&a=1"
        );
        assert_eq!(build_query_url("https://x/y?", &params), "https://x/y?a=1");
        assert_eq!(
            build_query_url("https://x/y?z=1&", &params),
            "https://x/y?z=1&a=1"
        );
    }

    #[test]
    fn test_query_url_empty_params_is_unchanged() {
        assert_eq!(build_query_url("https://x/y", &QueryParams::new()), "https://x/y");
    }

    #[test]
    fn test_query_url_keeps_insertion_order() {
        let params = QueryParams::new()
            .with("zeta", 1)
            .with("alpha", true)
            .with("mid", 1.5);
        assert_eq!(
            build_query_url("https://x/y", &params),
            "https://x/y?zeta=1&alpha=true&mid=1.5"
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new().with("a", "1").with("b", "2");
        params.insert("a", "3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn test_params_from_json_map() {
        let map = serde_json::json!({"region": "DE", "items": 10, "hasimages": true})
            .as_object()
            .cloned()
            .unwrap();
        let params = QueryParams::try_from(map).unwrap();
        assert_eq!(params.get("region"), Some(&ParamValue::Str("DE".to_string())));
        assert_eq!(params.get("items"), Some(&ParamValue::Int(10)));
        assert_eq!(params.get("hasimages"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_params_from_json_map_keep_caller_order() {
        let map = serde_json::json!({"zeta": 1, "alpha": 2})
            .as_object()
            .cloned()
            .unwrap();
        let params = QueryParams::try_from(map).unwrap();
        assert_eq!(
            build_query_url("https://x/programs", &params),
            "https://x/programs?zeta=1&alpha=2"
        );
    }

    #[test]
    fn test_params_from_json_map_rejects_nested_values() {
        let map = serde_json::json!({"programs": [1, 2]})
            .as_object()
            .cloned()
            .unwrap();
        let err = QueryParams::try_from(map).unwrap_err();
        assert!(matches!(err, ZanoxError::InvalidParam(_)));
        assert!(err.to_string().contains("programs"));
    }

    #[test]
    fn test_authenticated_get_headers() {
        let credentials = Credentials::new("CID", "secret");
        let request = build_authenticated_get(
            &credentials,
            "https://api.example/json/2011-03-01/adspaces",
            "/adspaces",
        )
        .unwrap();

        assert_eq!(request.url, "https://api.example/json/2011-03-01/adspaces");
        assert!(request.authorization().unwrap().starts_with("ZXWS CID:"));
        assert!(NaiveDateTime::parse_from_str(request.date().unwrap(), HTTP_DATE_FORMAT).is_ok());
        assert!(!request.nonce().unwrap().is_empty());
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_authenticated_get_signs_date_and_nonce_headers() {
        let credentials = Credentials::new("CID", "secret");
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let request = build_authenticated_get_at(
            &credentials,
            "https://api.example/json/2011-03-01/adspaces?items=5",
            "/adspaces",
            now,
            "abc123".to_string(),
        )
        .unwrap();

        assert_eq!(request.date(), Some("Mon, 15 Jan 2024 08:30:00 GMT"));
        assert_eq!(request.nonce(), Some("abc123"));

        let expected = compute_signature(
            "GET",
            "/adspaces",
            "Mon, 15 Jan 2024 08:30:00 GMT",
            "abc123",
            "secret",
        )
        .unwrap();
        assert_eq!(
            request.authorization(),
            Some(format!("ZXWS CID:{expected}").as_str())
        );
    }

    #[test]
    fn test_each_request_gets_fresh_nonce() {
        let credentials = Credentials::new("CID", "secret");
        let a = build_authenticated_get(&credentials, "https://x/y", "/y").unwrap();
        let b = build_authenticated_get(&credentials, "https://x/y", "/y").unwrap();
        assert_ne!(a.nonce(), b.nonce());
        assert_ne!(a.authorization(), b.authorization());
    }

    #[test]
    fn test_connect_id_with_newline_is_rejected() {
        let credentials = Credentials::new("bad\nid", "secret");
        let result = build_authenticated_get(&credentials, "https://x/y", "/y");
        assert!(matches!(result, Err(ZanoxError::InvalidHeader(_))));
    }
}
