//! Cookie types shared between the request context and the response unwrapper.
//!
//! Two views of a cookie exist here:
//! - [`Cookie`] / [`CookieOptions`] are the **jar-side** records: what a
//!   [`CookieJar`] stores and what the dispatcher reads back to build the
//!   `cookie` request header.
//! - [`SetCookie`] / [`SetCookieOptions`] are the **wire-side** records: the
//!   `setCookies` entries a server places inside its response envelope. Wire
//!   options are loosely typed (`maxAge` may arrive as a number or a numeric
//!   string, `expires` as a date string) and are coerced into jar options
//!   before being applied.
//!
//! An attribute is forwarded from the wire into the jar only when it is
//! present and non-empty/non-zero; everything else is dropped rather than
//! stored as an empty value.

mod jar;
mod memory;

pub use jar::{CookieJar, CookieJarHandle};
pub use memory::MemoryJar;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::OffsetDateTime;

/// A cookie as stored in a jar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cookie {
    /// Raw cookie value (not URL-decoded).
    pub value: String,
    /// Attributes the server attached when issuing the cookie.
    pub options: CookieOptions,
}

/// Jar-side cookie attributes.
///
/// `None` / `false` means the attribute was never supplied; the jar does not
/// distinguish "absent" from "explicitly empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    /// Lifetime in seconds.
    pub max_age: Option<i64>,
    /// Path scoping (e.g. `"/"`).
    pub path: Option<String>,
    /// Domain scoping (host-only if `None`).
    pub domain: Option<String>,
    /// Send only over HTTPS.
    pub secure: bool,
    /// Blocked from client-side script access.
    pub http_only: bool,
    /// `"Strict"`, `"Lax"` or `"None"`.
    pub same_site: Option<String>,
    /// Absolute expiry. Session cookie if `None`.
    pub expires: Option<OffsetDateTime>,
}

/// One `setCookies` entry from a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub options: SetCookieOptions,
}

/// Wire-side cookie attributes, as loosely shaped as servers send them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookieOptions {
    /// Number or numeric string; anything else is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    /// RFC 3339 or RFC 2822 date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl SetCookieOptions {
    /// Coerces the wire attributes into jar attributes.
    ///
    /// Only present, non-empty, non-zero attributes survive the conversion.
    /// An unparseable `expires` date is dropped.
    pub fn to_jar_options(&self) -> CookieOptions {
        CookieOptions {
            max_age: self
                .max_age
                .as_ref()
                .and_then(coerce_max_age)
                .filter(|n| *n != 0),
            path: self.path.clone().filter(|s| !s.is_empty()),
            domain: self.domain.clone().filter(|s| !s.is_empty()),
            secure: self.secure.unwrap_or(false),
            http_only: self.http_only.unwrap_or(false),
            same_site: self.same_site.clone().filter(|s| !s.is_empty()),
            expires: self
                .expires
                .as_deref()
                .filter(|s| !s.is_empty())
                .and_then(parse_expires),
        }
    }
}

/// Accepts an integer, or a string with a leading integer prefix.
fn coerce_max_age(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            let s = s.trim();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1i64, rest),
                None => (1i64, s.strip_prefix('+').unwrap_or(s)),
            };
            let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
            prefix.parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

fn parse_expires(s: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(s, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(s, &Rfc2822))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_options_forward_only_truthy_attributes() {
        let wire: SetCookieOptions =
            serde_json::from_value(json!({"httpOnly": true, "path": "/"})).unwrap();
        let opts = wire.to_jar_options();
        assert!(opts.http_only);
        assert_eq!(opts.path.as_deref(), Some("/"));
        assert!(!opts.secure);
        assert_eq!(opts.max_age, None);
        assert_eq!(opts.domain, None);
        assert_eq!(opts.same_site, None);
        assert_eq!(opts.expires, None);
    }

    #[test]
    fn max_age_accepts_numbers_and_numeric_strings() {
        let from_number: SetCookieOptions =
            serde_json::from_value(json!({"maxAge": 3600})).unwrap();
        assert_eq!(from_number.to_jar_options().max_age, Some(3600));

        let from_string: SetCookieOptions =
            serde_json::from_value(json!({"maxAge": "86400"})).unwrap();
        assert_eq!(from_string.to_jar_options().max_age, Some(86400));

        // zero is treated as absent
        let zero: SetCookieOptions = serde_json::from_value(json!({"maxAge": 0})).unwrap();
        assert_eq!(zero.to_jar_options().max_age, None);

        let junk: SetCookieOptions =
            serde_json::from_value(json!({"maxAge": "soon"})).unwrap();
        assert_eq!(junk.to_jar_options().max_age, None);
    }

    #[test]
    fn empty_strings_are_not_forwarded() {
        let wire: SetCookieOptions =
            serde_json::from_value(json!({"path": "", "domain": "", "sameSite": "", "expires": ""}))
                .unwrap();
        assert_eq!(wire.to_jar_options(), CookieOptions::default());
    }

    #[test]
    fn expires_parses_rfc3339_and_rfc2822() {
        let iso: SetCookieOptions =
            serde_json::from_value(json!({"expires": "2025-12-31T23:59:59Z"})).unwrap();
        assert!(iso.to_jar_options().expires.is_some());

        let http_date: SetCookieOptions =
            serde_json::from_value(json!({"expires": "Wed, 31 Dec 2025 23:59:59 +0000"})).unwrap();
        assert!(http_date.to_jar_options().expires.is_some());

        let invalid: SetCookieOptions =
            serde_json::from_value(json!({"expires": "tomorrow"})).unwrap();
        assert_eq!(invalid.to_jar_options().expires, None);
    }
}
