//! In-memory cookie jar with no persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Cookie, CookieJar, CookieJarHandle, CookieOptions};

/// Cookie jar that lives for as long as the handle does.
///
/// No expiry or eviction is enforced; `max_age` and `expires` are stored but
/// not acted upon.
#[derive(Debug, Clone, Default)]
pub struct MemoryJar {
    entries: HashMap<String, Cookie>,
}

impl MemoryJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the jar in the shared handle used by a request context.
    pub fn into_handle(self) -> CookieJarHandle {
        Arc::new(RwLock::new(self))
    }
}

impl CookieJar for MemoryJar {
    fn get_all(&self) -> HashMap<String, Cookie> {
        self.entries.clone()
    }

    fn set(&mut self, name: &str, value: &str, options: CookieOptions) {
        self.entries.insert(
            name.to_string(),
            Cookie {
                value: value.to_string(),
                options,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_cookie_with_same_name() {
        let mut jar = MemoryJar::new();
        jar.set("sid", "abc", CookieOptions::default());
        jar.set(
            "sid",
            "def",
            CookieOptions {
                http_only: true,
                ..Default::default()
            },
        );

        let all = jar.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all["sid"].value, "def");
        assert!(all["sid"].options.http_only);
    }

    #[test]
    fn empty_jar_yields_no_cookies() {
        let jar = MemoryJar::new();
        assert!(jar.get_all().is_empty());
    }
}
