//! The envelope client: verb helpers over the dispatcher and unwrapper.
//!
//! [`Client`] owns one `reqwest::Client` so connections are reused across
//! calls. The public fetch surface never fails: every transport error, parse
//! error, or status mismatch collapses to the synthesized
//! `{statusCode: 500, message: "Server error"}` envelope, with the cause
//! logged. Callers that need to distinguish causes use [`Client::try_fetch`].

use serde_json::Value;

use crate::context::RequestContext;
use crate::envelope::{Envelope, WireEnvelope};
use crate::errors::FetchError;
use crate::listing::Listing;
use crate::net::dispatch;
use crate::payload::Payload;
use crate::request::{Method, RequestOptions};

/// Envelope-speaking HTTP client.
#[derive(Debug, Clone, Default)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with the transport defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client over a pre-configured transport (timeouts, default
    /// headers, proxies, ...).
    pub fn with_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Dispatches one request and unwraps the response envelope, returning
    /// the cause on failure.
    ///
    /// Success requires the transport status to be 2xx **and** numerically
    /// equal to the envelope's own `statusCode`. On success, any
    /// `setCookies` entries are applied to the context's jar before the
    /// envelope (minus `setCookies`) is returned.
    pub async fn try_fetch(
        &self,
        url: &str,
        options: &RequestOptions,
        ctx: &RequestContext,
    ) -> Result<Envelope, FetchError> {
        let res = dispatch(&self.http, url, options, ctx).await?;
        let wire: WireEnvelope = serde_json::from_slice(&res.body)?;

        if !(res.ok && i64::from(res.status) == wire.status_code) {
            return Err(FetchError::StatusMismatch {
                transport: res.status,
                envelope: wire.status_code,
            });
        }

        if let Some(jar) = &ctx.cookies {
            if !wire.set_cookies.is_empty() {
                match jar.write() {
                    Ok(mut guard) => {
                        for cookie in &wire.set_cookies {
                            guard.set(&cookie.name, &cookie.value, cookie.options.to_jar_options());
                        }
                    }
                    Err(err) => {
                        log::error!(
                            "cookie jar lock poisoned, dropping {} setCookies entries for {url}: {err}",
                            wire.set_cookies.len()
                        );
                    }
                }
            }
        }

        Ok(wire.into_envelope())
    }

    /// Like [`Client::try_fetch`], but never fails: every failure path
    /// yields [`Envelope::server_error`] and logs the cause.
    pub async fn fetch_envelope(
        &self,
        url: &str,
        options: &RequestOptions,
        ctx: &RequestContext,
    ) -> Envelope {
        match self.try_fetch(url, options, ctx).await {
            Ok(envelope) => envelope,
            Err(err) => {
                log::error!("fetch failed for {url}: {err}");
                Envelope::server_error()
            }
        }
    }

    /// GET. The payload's `params` go into the query string; no body is
    /// sent.
    pub async fn get(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        self.send(Method::Get, url, payload, ctx, options).await
    }

    /// POST with the normalized body serialized as JSON.
    pub async fn post(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        self.send(Method::Post, url, payload, ctx, options).await
    }

    /// PUT with the normalized body serialized as JSON.
    pub async fn put(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        self.send(Method::Put, url, payload, ctx, options).await
    }

    /// DELETE with the normalized body serialized as JSON.
    pub async fn delete(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        self.send(Method::Delete, url, payload, ctx, options).await
    }

    /// PATCH with the normalized body serialized as JSON.
    pub async fn patch(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        self.send(Method::Patch, url, payload, ctx, options).await
    }

    /// GET, returning only the envelope `message`.
    pub async fn get_message(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Value {
        self.get(url, payload, ctx, options).await.message
    }

    /// GET, returning only the numeric status code.
    pub async fn get_status(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> i64 {
        self.get(url, payload, ctx, options).await.status_code
    }

    /// GET, normalizing the message into a defaulted [`Listing`].
    pub async fn get_listing(
        &self,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Listing {
        let message = self.get_message(url, payload, ctx, options).await;
        Listing::from_message(&message)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: &Payload,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Envelope {
        let normalized = payload.normalize(url);
        let mut options = options.with_method(method);
        if method.has_body() {
            options = options.with_body(normalized.body_json());
        }
        self.fetch_envelope(&normalized.url, &options, ctx).await
    }
}
