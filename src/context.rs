//! Per-request execution context.

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use url::Url;

use crate::cookies::CookieJarHandle;

/// The bundle of request-scoped capabilities a call may carry: a base URL to
/// resolve relative targets against, inbound headers to forward, and a cookie
/// jar.
///
/// Every field is optional. A default context disables base-URL resolution,
/// forwards no headers, and degrades cookie handling silently (no `cookie`
/// header is sent, `setCookies` entries are discarded).
#[derive(Clone, Default)]
pub struct RequestContext {
    /// Base URL that relative request targets are resolved against.
    pub base_url: Option<Url>,
    /// Inbound headers forwarded onto every outgoing request.
    pub headers: HeaderMap,
    /// Cookie jar read for the `cookie` header and written on `setCookies`.
    pub cookies: Option<CookieJarHandle>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Adds one forwarded header. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<HeaderName>(),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn with_cookies(mut self, cookies: CookieJarHandle) -> Self {
        self.cookies = Some(cookies);
        self
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("cookies", &self.cookies.as_ref().map(|_| "CookieJar"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_header_names_are_ignored() {
        let ctx = RequestContext::new()
            .with_header("x-forwarded-for", "10.0.0.1")
            .with_header("bad header name", "value");
        assert_eq!(ctx.headers.len(), 1);
        assert_eq!(ctx.headers["x-forwarded-for"], "10.0.0.1");
    }
}
