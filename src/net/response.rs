//! Minimal HTTP response model.
//!
//! Represents a **fully buffered** transport response: final URL (after
//! redirects, if followed), status code and ok flag, response headers, and
//! the raw body bytes. No parsing beyond buffering happens here; the
//! envelope layer decodes the body with `serde_json::from_slice`.

use http::HeaderMap;
use url::Url;

/// A buffered transport response, reflecting what was received as-is.
#[derive(Debug)]
pub struct TransportResponse {
    /// Final URL of the response (after redirects, if any).
    pub url: Url,

    /// Numeric HTTP status code (e.g. `200`, `404`).
    pub status: u16,

    /// True when `status` is in the 2xx range.
    pub ok: bool,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}
