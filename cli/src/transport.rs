//! `reqwest` implementation of the shortener transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use shortener::{HttpReply, Transport};

const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()?;
        Ok(Self { http })
    }

    /// `GET url` and return only the status code.
    pub async fn get_status(&self, url: &str) -> Result<u16, reqwest::Error> {
        let response = self.http.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpReply::new(status, text))
    }
}
