//! Request options: method, transport policies, headers, body.
//!
//! Mirrors the option surface of a browser-style fetch call. Every field is
//! optional; absent fields take the transport defaults. Policies that have no
//! server-side transport meaning are mapped onto the nearest request header
//! ([`CachePolicy`] onto `Cache-Control`, [`ReferrerPolicy`] onto
//! `Referrer-Policy`) or retained as inert data ([`Mode`]).

use http::HeaderMap;

/// HTTP method fixed by a verb helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// True for the verbs that carry a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Request mode. Meaningful only to browser transports; carried for
/// wire-contract parity and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cors,
    NoCors,
    SameOrigin,
}

/// Cache policy, emitted as a `Cache-Control` request header where one
/// exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

impl CachePolicy {
    pub fn cache_control(&self) -> Option<&'static str> {
        match self {
            CachePolicy::Default | CachePolicy::ForceCache => None,
            CachePolicy::NoStore => Some("no-store"),
            CachePolicy::Reload | CachePolicy::NoCache => Some("no-cache"),
            CachePolicy::OnlyIfCached => Some("only-if-cached"),
        }
    }
}

/// Whether the synthesized `cookie` header is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsPolicy {
    /// Never send cookies.
    Omit,
    SameOrigin,
    Include,
}

/// How redirects are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow up to the transport's redirect limit.
    Follow,
    /// Treat any redirect as a transport error.
    Error,
    /// Return the redirect response as-is.
    Manual,
}

/// Referrer to send: none at all, or whatever the transport would send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referrer {
    NoReferrer,
    Client,
}

/// Referrer policy, emitted as the `Referrer-Policy` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferrerPolicy {
    NoReferrer,
    NoReferrerWhenDowngrade,
    Origin,
    OriginWhenCrossOrigin,
    SameOrigin,
    StrictOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

impl ReferrerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferrerPolicy::NoReferrer => "no-referrer",
            ReferrerPolicy::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            ReferrerPolicy::Origin => "origin",
            ReferrerPolicy::OriginWhenCrossOrigin => "origin-when-cross-origin",
            ReferrerPolicy::SameOrigin => "same-origin",
            ReferrerPolicy::StrictOrigin => "strict-origin",
            ReferrerPolicy::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
            ReferrerPolicy::UnsafeUrl => "unsafe-url",
        }
    }
}

/// Options for one request. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub mode: Option<Mode>,
    pub cache: Option<CachePolicy>,
    pub credentials: Option<CredentialsPolicy>,
    pub redirect: Option<RedirectPolicy>,
    pub referrer: Option<Referrer>,
    pub referrer_policy: Option<ReferrerPolicy>,
    /// Caller headers. Merged last, so they win over forwarded context
    /// headers and the synthesized `cookie` header.
    pub headers: HeaderMap,
    /// Raw request body. Verb helpers fill this with serialized JSON.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialsPolicy) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_redirect(mut self, redirect: RedirectPolicy) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_referrer_policy(mut self, policy: ReferrerPolicy) -> Self {
        self.referrer_policy = Some(policy);
        self
    }

    /// Adds one caller header. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<http::header::HeaderName>(),
            http::header::HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_get_is_bodyless() {
        assert!(!Method::Get.has_body());
        for method in [Method::Post, Method::Put, Method::Delete, Method::Patch] {
            assert!(method.has_body(), "{} should carry a body", method.as_str());
        }
    }

    #[test]
    fn cache_policies_map_to_request_directives() {
        assert_eq!(CachePolicy::Default.cache_control(), None);
        assert_eq!(CachePolicy::NoStore.cache_control(), Some("no-store"));
        assert_eq!(CachePolicy::Reload.cache_control(), Some("no-cache"));
        assert_eq!(CachePolicy::OnlyIfCached.cache_control(), Some("only-if-cached"));
    }
}
