//! HTTP calls to the shortening service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport reports only "no response" faults as `Err`. Status codes are
//! passed through untouched so `FormState::settle` can classify them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use shortener::{DEFAULT_BASE_URL, Endpoint, HttpReply, ShortenRequest, Transport};

pub const NOT_AVAILABLE: &str = "not available on server";

/// Endpoint for this build, from `SHORTENER_BASE_URL` at compile time.
///
/// `option_env!` takes a literal, so the name is spelled out here and pinned
/// to [`shortener::BASE_URL_ENV`] by a test.
pub fn configured_endpoint() -> Endpoint {
    endpoint_from(option_env!("SHORTENER_BASE_URL"))
}

fn endpoint_from(raw: Option<&str>) -> Endpoint {
    let raw = raw.unwrap_or(DEFAULT_BASE_URL);
    match Endpoint::parse(raw) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("ignoring {}: {e}", shortener::BASE_URL_ENV);
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Endpoint::default()
        }
    }
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpReply::new(status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(NOT_AVAILABLE.to_owned())
        }
    }
}

/// Post `request` to `url` through [`BrowserTransport`].
///
/// # Errors
///
/// Returns an error string if no HTTP response was obtained.
pub async fn shorten(url: &str, request: &ShortenRequest) -> Result<HttpReply, String> {
    let body = request.to_json().map_err(|e| e.to_string())?;
    #[cfg(feature = "hydrate")]
    log::debug!("POST {url}");
    BrowserTransport.post_json(url, body).await
}
