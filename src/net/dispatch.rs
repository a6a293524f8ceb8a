use http::header::{HeaderValue, CACHE_CONTROL, COOKIE, REFERER, REFERRER_POLICY};
use http::HeaderMap;

use crate::context::RequestContext;
use crate::errors::FetchError;
use crate::request::{CredentialsPolicy, RedirectPolicy, Referrer, RequestOptions};

use super::TransportResponse;

/// Builds and issues one request, returning the buffered response.
///
/// The target is resolved against the context's base URL when relative.
/// Headers are merged in order (later wins): forwarded context headers, the
/// synthesized `cookie` header, policy-derived headers, caller headers.
/// When the jar is absent or empty the `cookie` header is omitted entirely
/// rather than sent as an empty string.
pub async fn dispatch(
    http: &reqwest::Client,
    url: &str,
    options: &RequestOptions,
    ctx: &RequestContext,
) -> Result<TransportResponse, FetchError> {
    let target = url::Url::options()
        .base_url(ctx.base_url.as_ref())
        .parse(url)?;
    let headers = build_headers(options, ctx);

    // The redirect policy is per-client in reqwest, so a non-default policy
    // gets a one-off client.
    let override_client = match options.redirect {
        Some(RedirectPolicy::Manual) => Some(
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?,
        ),
        Some(RedirectPolicy::Error) => Some(
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::custom(|attempt| {
                    attempt.error("redirects disabled")
                }))
                .build()?,
        ),
        _ => None,
    };
    let client = override_client.as_ref().unwrap_or(http);

    let mut builder = client
        .request(options.method.unwrap_or_default().into(), target)
        .headers(headers);
    if let Some(body) = &options.body {
        builder = builder.body(body.clone());
    }

    let res = builder.send().await?;

    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let ok = res.status().is_success();
    let headers = res.headers().clone();

    // Note: does not deal with streaming
    let body = res.bytes().await?.to_vec();

    Ok(TransportResponse {
        url: final_url,
        status,
        ok,
        headers,
        body,
    })
}

fn build_headers(options: &RequestOptions, ctx: &RequestContext) -> HeaderMap {
    let mut headers = ctx.headers.clone();

    if !matches!(options.credentials, Some(CredentialsPolicy::Omit)) {
        if let Some(cookie) = cookie_header(ctx) {
            headers.insert(COOKIE, cookie);
        }
    }

    if let Some(directive) = options.cache.and_then(|c| c.cache_control()) {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(directive));
    }
    if let Some(policy) = options.referrer_policy {
        headers.insert(REFERRER_POLICY, HeaderValue::from_static(policy.as_str()));
    }
    if matches!(options.referrer, Some(Referrer::NoReferrer)) {
        headers.remove(REFERER);
    }

    // Caller headers win over everything merged above.
    for (name, value) in options.headers.iter() {
        headers.insert(name.clone(), value.clone());
    }

    headers
}

/// Joins every jar cookie as `name=value; ...`, sorted by name so the header
/// is deterministic. `None` when the jar is absent, unreadable, or empty.
fn cookie_header(ctx: &RequestContext) -> Option<HeaderValue> {
    let jar = ctx.cookies.as_ref()?;
    let guard = jar.read().ok()?;
    let mut pairs: Vec<(String, String)> = guard
        .get_all()
        .into_iter()
        .map(|(name, cookie)| (name, cookie.value))
        .collect();
    drop(guard);

    if pairs.is_empty() {
        return None;
    }
    pairs.sort();

    let value = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");
    HeaderValue::from_str(&value).ok()
}
