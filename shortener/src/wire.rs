//! Wire schema for the shortening service.
//!
//! The service accepts `POST /shorten` with `{"url": ...}` and answers
//! `{"short_url": ...}` on success. Anything else in a success body is
//! ignored.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

/// Path of the shortening endpoint, relative to the service base URL.
pub const SHORTEN_PATH: &str = "/shorten";

/// Request body sent to the shortening service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    /// The long URL exactly as the user typed it.
    pub url: String,
}

impl ShortenRequest {
    /// Serialize into the JSON body text.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error; in practice a single string field
    /// always serializes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Success body returned by the shortening service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

impl ShortenResponse {
    /// Parse a success body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or lacks a string `short_url`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
