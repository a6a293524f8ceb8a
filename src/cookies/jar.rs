//! Cookie jar abstraction.
//!
//! A jar holds the cookies belonging to one request context. The dispatcher
//! reads every cookie to synthesize the outgoing `cookie` header, and the
//! response unwrapper writes server-issued `setCookies` entries back in.
//!
//! The trait is deliberately small: the host application usually already owns
//! a cookie store (a server framework's per-request cookie API, a browser
//! jar, ...) and only needs to adapt it to these two calls. [`MemoryJar`]
//! is provided for applications without one.
//!
//! Jars are shared as `CookieJarHandle = Arc<RwLock<dyn CookieJar>>`: take a
//! read lock to build the request header, a write lock to store cookies.
//!
//! [`MemoryJar`]: super::MemoryJar

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Cookie, CookieOptions};

/// A store of cookies keyed by name.
pub trait CookieJar: Send + Sync {
    /// Returns every cookie in the jar, keyed by name.
    fn get_all(&self) -> HashMap<String, Cookie>;

    /// Stores a cookie, replacing any existing cookie with the same name.
    fn set(&mut self, name: &str, value: &str, options: CookieOptions);
}

/// A shared, read/write-locked handle to a type-erased [`CookieJar`].
pub type CookieJarHandle = Arc<RwLock<dyn CookieJar + Send + Sync>>;
