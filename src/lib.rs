pub mod client;
pub mod context;
pub mod cookies;
pub mod envelope;
pub mod errors;
pub mod listing;
pub mod net;
pub mod payload;
pub mod request;

pub use client::Client;
pub use context::RequestContext;
pub use cookies::{Cookie, CookieJar, CookieJarHandle, CookieOptions, MemoryJar, SetCookie};
pub use envelope::Envelope;
pub use errors::FetchError;
pub use listing::Listing;
pub use payload::{Fields, NormalizedRequest, Payload};
pub use request::{Method, RequestOptions};
