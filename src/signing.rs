//! Request signing for the Zanox API.
//!
//! Every request carries three authentication headers:
//!
//! - `Authorization: ZXWS <connect_id>:<signature>`
//! - `Date: <RFC-1123 timestamp>`
//! - `nonce: <random token>`
//!
//! The signature is `base64(HMAC-SHA1(secret_key, verb + uri + timestamp + nonce))`,
//! with the four fields concatenated without delimiters. The server recomputes
//! it from the headers it receives, so the timestamp signed here must be the
//! exact string sent in `Date`.

use std::env;
use std::fmt::Debug;
use std::sync::Arc;

use base64::prelude::*;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha1::Sha1;

use crate::error::{Result, ZanoxError};

type HmacSha1 = Hmac<Sha1>;

/// Scheme prefix of the `Authorization` header.
pub const AUTH_SCHEME: &str = "ZXWS";

/// Number of random bytes in a nonce (hex-encoded to twice as many chars).
pub const NONCE_BYTES: usize = 16;

/// `strftime` pattern for RFC-1123 dates as sent in the `Date` header.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Zanox API credentials: the public connect ID and the secret key.
///
/// Both values are opaque and never validated locally; bad credentials
/// only show up as an authentication failure from the service. Clones
/// share the same underlying strings.
#[derive(Clone)]
pub struct Credentials {
    connect_id: Arc<str>,
    secret_key: Arc<str>,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("connect_id", &self.connect_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Creates a new [`Credentials`] pair.
    #[must_use]
    pub fn new(connect_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            connect_id: Arc::from(connect_id.into()),
            secret_key: Arc::from(secret_key.into()),
        }
    }

    /// Read credentials from `ZANOX_CONNECT_ID` and `ZANOX_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> Result<Self> {
        let connect_id = env::var("ZANOX_CONNECT_ID").map_err(|_| {
            ZanoxError::ConfigMissing("ZANOX_CONNECT_ID environment variable not set".to_string())
        })?;
        let secret_key = env::var("ZANOX_SECRET_KEY").map_err(|_| {
            ZanoxError::ConfigMissing("ZANOX_SECRET_KEY environment variable not set".to_string())
        })?;

        Ok(Self::new(connect_id, secret_key))
    }

    /// The public connect ID.
    pub fn connect_id(&self) -> &str {
        &self.connect_id
    }

    /// Sign a request with this pair's secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the MAC rejects the key.
    pub fn sign(&self, verb: &str, uri: &str, timestamp: &str, nonce: &str) -> Result<String> {
        compute_signature(verb, uri, timestamp, nonce, &self.secret_key)
    }

    /// Build the `Authorization` header value for a signature.
    pub fn authorization(&self, signature: &str) -> String {
        format!("{AUTH_SCHEME} {}:{signature}", self.connect_id)
    }
}

/// Generate a fresh single-use nonce.
///
/// Draws [`NONCE_BYTES`] bytes from the thread-local CSPRNG and returns them
/// as lowercase hex. No registry of issued nonces is kept.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute the request signature.
///
/// `uri` is the resource path only (e.g. `/adspaces`), without scheme, host,
/// API version prefix, or query string.
///
/// # Errors
///
/// Returns [`ZanoxError::Signing`] if the MAC rejects the key.
pub fn compute_signature(
    verb: &str,
    uri: &str,
    timestamp: &str,
    nonce: &str,
    secret_key: &str,
) -> Result<String> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| ZanoxError::Signing(e.to_string()))?;
    mac.update(verb.as_bytes());
    mac.update(uri.as_bytes());
    mac.update(timestamp.as_bytes());
    mac.update(nonce.as_bytes());
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

/// Format an instant as an RFC-1123 HTTP date (`Thu, 15 Aug 2013 16:45:03 GMT`).
pub fn format_http_date(instant: DateTime<Utc>) -> String {
    instant.format(HTTP_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{NaiveDateTime, TimeZone};

    use super::*;

    const SECRET: &str = "test-secret-key";
    const TIMESTAMP: &str = "Thu, 15 Aug 2013 16:45:03 GMT";
    const NONCE: &str = "4f1bd0a9c3e2d5b6a7f8e9d0";

    #[test]
    fn test_signature_matches_rfc2202_vector() {
        // RFC 2202 test case 2, split across the four concatenated fields.
        let signature =
            compute_signature("what", " do ya", " want for", " nothing?", "Jefe").unwrap();
        assert_eq!(signature, "7/zfauXrL6LSdBbV8YTfnCWafHk=");
    }

    #[test]
    fn test_signature_for_get_request() {
        let signature = compute_signature("GET", "/adspaces", TIMESTAMP, NONCE, SECRET).unwrap();
        assert_eq!(signature, "/mw03zNF9BStFciMI0cpaZHwYPk=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = compute_signature("GET", "/programs", TIMESTAMP, NONCE, SECRET).unwrap();
        let b = compute_signature("GET", "/programs", TIMESTAMP, NONCE, SECRET).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_each_field() {
        let base = compute_signature("GET", "/adspaces", TIMESTAMP, NONCE, SECRET).unwrap();

        let variants = [
            compute_signature("POST", "/adspaces", TIMESTAMP, NONCE, SECRET).unwrap(),
            compute_signature("GET", "/admedia", TIMESTAMP, NONCE, SECRET).unwrap(),
            compute_signature("GET", "/adspaces", "Thu, 15 Aug 2013 16:45:04 GMT", NONCE, SECRET)
                .unwrap(),
            compute_signature("GET", "/adspaces", TIMESTAMP, "other-nonce", SECRET).unwrap(),
            compute_signature("GET", "/adspaces", TIMESTAMP, NONCE, "other-secret").unwrap(),
        ];

        for variant in variants {
            assert_ne!(variant, base);
        }
    }

    #[test]
    fn test_empty_secret_is_accepted() {
        assert!(compute_signature("GET", "/profiles", TIMESTAMP, NONCE, "").is_ok());
    }

    #[test]
    fn test_nonce_length_and_charset() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), NONCE_BYTES * 2);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(NONCE_BYTES * 8 >= 80);
    }

    #[test]
    fn test_nonces_do_not_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_nonce()));
        }
    }

    #[test]
    fn test_http_date_format() {
        let instant = Utc.with_ymd_and_hms(2013, 8, 15, 16, 45, 3).unwrap();
        assert_eq!(format_http_date(instant), TIMESTAMP);

        let parsed = NaiveDateTime::parse_from_str(&format_http_date(Utc::now()), HTTP_DATE_FORMAT);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("CID", "super-secret");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("CID"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_credentials_sign_uses_secret() {
        let credentials = Credentials::new("CID", SECRET);
        let signature = credentials.sign("GET", "/adspaces", TIMESTAMP, NONCE).unwrap();
        assert_eq!(signature, "/mw03zNF9BStFciMI0cpaZHwYPk=");
        assert_eq!(
            credentials.authorization(&signature),
            "ZXWS CID:/mw03zNF9BStFciMI0cpaZHwYPk="
        );
    }
}
