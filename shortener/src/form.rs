//! Submission form state: draft input, loading flag, and the submit flow.
//!
//! DESIGN
//! ======
//! The form owns exactly two pieces of state. `begin` and `settle` bracket
//! the single network call so a UI can keep the state in a reactive signal
//! and release it across the await; `submit` is the same flow for callers
//! that can hold `&mut self` for the whole request.
//!
//! A submit while loading is rejected with [`SubmitError::InFlight`]. The
//! outstanding request is left alone, so the first submission wins.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::endpoint::Endpoint;
use crate::error::SubmitError;
use crate::transport::{HttpReply, Transport};
use crate::wire::{ShortenRequest, ShortenResponse};

/// Submit control label while idle.
pub const IDLE_LABEL: &str = "Shorten URL";
/// Submit control label while a request is outstanding.
pub const LOADING_LABEL: &str = "Shortening...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    draft: String,
    loading: bool,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft with the latest input text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { IDLE_LABEL }
    }

    /// Validate the draft and mark the form as loading.
    ///
    /// The returned request carries the draft verbatim.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] while a request is outstanding, and
    /// [`SubmitError::EmptyInput`] for an empty draft. Neither changes state.
    pub fn begin(&mut self) -> Result<ShortenRequest, SubmitError> {
        if self.loading {
            tracing::debug!("submit rejected: request already in flight");
            return Err(SubmitError::InFlight);
        }
        if self.draft.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        self.loading = true;
        Ok(ShortenRequest { url: self.draft.clone() })
    }

    /// Clear the loading flag and classify the transport outcome.
    ///
    /// # Errors
    ///
    /// Returns the service, transport, or decode failure for the reply.
    pub fn settle(&mut self, outcome: Result<HttpReply, String>) -> Result<String, SubmitError> {
        self.loading = false;
        let classified = classify_reply(outcome);
        match &classified {
            Ok(short_url) => tracing::info!(%short_url, "url shortened"),
            Err(e) => tracing::warn!(error = %e, "shorten request failed"),
        }
        classified
    }

    /// Run one full submission against `endpoint`.
    ///
    /// `on_result` is invoked with the short URL on success only; `None` is a
    /// no-op. The loading flag is clear again on every return path.
    ///
    /// # Errors
    ///
    /// Any [`SubmitError`]; see [`FormState::begin`] and [`FormState::settle`].
    pub async fn submit<T: Transport>(
        &mut self,
        transport: &T,
        endpoint: &Endpoint,
        on_result: Option<&mut dyn FnMut(String)>,
    ) -> Result<String, SubmitError> {
        let request = self.begin()?;
        let url = endpoint.shorten_url();
        tracing::debug!(%url, long_url = %request.url, "submitting url");

        let outcome = match request.to_json() {
            Ok(body) => transport.post_json(&url, body).await,
            Err(e) => Err(e.to_string()),
        };

        let result = self.settle(outcome);
        if let (Ok(short_url), Some(callback)) = (&result, on_result) {
            callback(short_url.clone());
        }
        result
    }
}

/// Map a transport outcome onto the short URL or a [`SubmitError`].
///
/// # Errors
///
/// Transport faults, non-2xx statuses (body verbatim), and success bodies
/// without a string `short_url`.
pub fn classify_reply(outcome: Result<HttpReply, String>) -> Result<String, SubmitError> {
    let reply = outcome.map_err(SubmitError::Transport)?;
    if !reply.is_success() {
        return Err(SubmitError::Service { status: reply.status, body: reply.body });
    }
    ShortenResponse::from_json(&reply.body)
        .map(|resp| resp.short_url)
        .map_err(|e| SubmitError::Decode(e.to_string()))
}
