//! Shortening service endpoint configuration.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::wire::SHORTEN_PATH;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable naming the service base URL, read by every front end.
pub const BASE_URL_ENV: &str = "SHORTENER_BASE_URL";

/// Errors produced while building an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("base URL is empty")]
    Empty,
    #[error("base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Where the shortening service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Parse a base URL, trimming whitespace and trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::Empty`] for blank input and
    /// [`EndpointError::UnsupportedScheme`] for anything that is not HTTP(S).
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let lower = trimmed.to_ascii_lowercase();
        let has_host = |prefix: &str| lower.len() > prefix.len() && lower.starts_with(prefix);
        if !has_host("http://") && !has_host("https://") {
            return Err(EndpointError::UnsupportedScheme(trimmed.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of the shortening endpoint.
    #[must_use]
    pub fn shorten_url(&self) -> String {
        format!("{}{SHORTEN_PATH}", self.base_url)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}
