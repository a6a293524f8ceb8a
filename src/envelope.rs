//! The JSON response envelope convention.
//!
//! Servers reply with `{"statusCode": ..., "message": ..., "setCookies":
//! [...], ...}` where `statusCode` and `message` are required, `setCookies`
//! is optional, and every other field passes through to the caller verbatim.
//! `message` is typed as a [`Value`] rather than a string: listing endpoints
//! put a structured `{pagination, results, data}` object in it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cookies::SetCookie;

/// Synthesized status code for every failure path.
pub const SERVER_ERROR_STATUS: i64 = 500;

/// Synthesized message for every failure path.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// A normalized response envelope, with `setCookies` already stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    pub message: Value,
    /// Every envelope field other than `statusCode`, `message` and
    /// `setCookies`, passed through verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Envelope {
    /// The single envelope every failure path collapses to.
    pub fn server_error() -> Self {
        Envelope {
            status_code: SERVER_ERROR_STATUS,
            message: Value::String(SERVER_ERROR_MESSAGE.to_string()),
            fields: Map::new(),
        }
    }

    /// True for the status codes the presentation layer treats as a
    /// completed submission (200 or 201).
    pub fn is_success(&self) -> bool {
        matches!(self.status_code, 200 | 201)
    }
}

/// The envelope as parsed off the wire, before cookie handling.
#[derive(Debug, Deserialize)]
pub(crate) struct WireEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    pub message: Value,
    #[serde(rename = "setCookies", default)]
    pub set_cookies: Vec<SetCookie>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl WireEnvelope {
    /// Drops `setCookies` and keeps everything else.
    pub fn into_envelope(self) -> Envelope {
        Envelope {
            status_code: self.status_code,
            message: self.message,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_pass_through_and_set_cookies_are_stripped() {
        let wire: WireEnvelope = serde_json::from_value(json!({
            "statusCode": 201,
            "message": "created",
            "id": 7,
            "token": "xyz",
            "setCookies": [{"name": "sid", "value": "abc"}]
        }))
        .unwrap();
        assert_eq!(wire.set_cookies.len(), 1);

        let envelope = wire.into_envelope();
        assert_eq!(envelope.status_code, 201);
        assert_eq!(envelope.message, json!("created"));
        assert_eq!(envelope.fields["id"], json!(7));
        assert_eq!(envelope.fields["token"], json!("xyz"));
        assert!(!envelope.fields.contains_key("setCookies"));
    }

    #[test]
    fn missing_required_fields_fail_to_parse() {
        assert!(serde_json::from_value::<WireEnvelope>(json!({"message": "hi"})).is_err());
        assert!(serde_json::from_value::<WireEnvelope>(json!({"statusCode": 200})).is_err());
    }

    #[test]
    fn server_error_envelope_is_fixed() {
        let envelope = Envelope::server_error();
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.message, json!("Server error"));
        assert!(envelope.fields.is_empty());
        assert!(!envelope.is_success());
    }

    #[test]
    fn success_covers_200_and_201() {
        let mut envelope = Envelope::server_error();
        envelope.status_code = 200;
        assert!(envelope.is_success());
        envelope.status_code = 201;
        assert!(envelope.is_success());
        envelope.status_code = 404;
        assert!(!envelope.is_success());
    }
}
