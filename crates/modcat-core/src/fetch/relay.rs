//! Relay request building and response unwrapping.
//!
//! The relay takes the upstream URL as a percent-encoded query value and
//! answers with a JSON object whose `contents` field holds the upstream body
//! as a string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use super::error::FetchError;
use crate::catalog::{Catalog, PayloadError};

/// Envelope field carrying the upstream body.
pub const ENVELOPE_FIELD: &str = "contents";

/// Characters left as-is when encoding a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `prefix` followed by the upstream URL encoded as a URI component.
pub fn relay_url(prefix: &str, upstream: &str) -> String {
    format!("{prefix}{}", utf8_percent_encode(upstream, URI_COMPONENT))
}

/// Parse a relay response body and the catalog embedded in it.
pub fn unwrap_envelope(body: &[u8]) -> Result<Catalog, FetchError> {
    let envelope: Value = serde_json::from_slice(body).map_err(PayloadError::from)?;
    let contents = envelope
        .get(ENVELOPE_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::Envelope(format!("no string `{ENVELOPE_FIELD}` field")))?;
    Ok(Catalog::from_json_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_url_encodes_upstream() {
        let url = relay_url(
            "https://api.allorigins.win/get?url=",
            "https://pixlcore.pages.dev/Mod_Data.json",
        );
        assert_eq!(
            url,
            "https://api.allorigins.win/get?url=https%3A%2F%2Fpixlcore.pages.dev%2FMod_Data.json"
        );
    }

    #[test]
    fn relay_url_encodes_like_a_uri_component() {
        let url = relay_url("/get?url=", "http://h.example/mod data.json?a=1&b=(x)*~'!");
        assert_eq!(
            url,
            "/get?url=http%3A%2F%2Fh.example%2Fmod%20data.json%3Fa%3D1%26b%3D(x)*~'!"
        );
    }

    #[test]
    fn unwraps_contents_string() {
        let body = br#"{"contents":"[{\"Name\":\"A\"}]","status":{"http_code":200}}"#;
        let catalog = unwrap_envelope(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name(), Some("A"));
    }

    #[test]
    fn missing_or_null_contents_is_envelope_error() {
        assert!(matches!(
            unwrap_envelope(br#"{"status":{}}"#),
            Err(FetchError::Envelope(_))
        ));
        assert!(matches!(
            unwrap_envelope(br#"{"contents":null}"#),
            Err(FetchError::Envelope(_))
        ));
    }

    #[test]
    fn non_array_contents_is_payload_error() {
        let body = br#"{"contents":"{\"error\":\"rate limited\"}"}"#;
        assert!(matches!(
            unwrap_envelope(body),
            Err(FetchError::Payload(PayloadError::NotAnArray("object")))
        ));
    }

    #[test]
    fn non_json_relay_body_is_payload_error() {
        assert!(matches!(
            unwrap_envelope(b"Bad Gateway"),
            Err(FetchError::Payload(PayloadError::Json(_)))
        ));
    }
}
