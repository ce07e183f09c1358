//! Submission failures and the notice text shown for each.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the form can hit ends up as a blocking notice. `Display`
//! carries diagnostic detail for logs; [`SubmitError::notice`] is the text a
//! user sees. For service errors the notice is the server body, verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const EMPTY_INPUT_NOTICE: &str = "Enter a URL";
pub const IN_FLIGHT_NOTICE: &str = "A request is already in progress";

/// Errors produced by a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The draft was empty.
    #[error("draft input is empty")]
    EmptyInput,

    /// A request from this form is still outstanding.
    #[error("a submission is already in flight")]
    InFlight,

    /// The service answered with a non-success status.
    #[error("service responded {status}: {body}")]
    Service { status: u16, body: String },

    /// The request never produced an HTTP response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A success response whose body is not `{"short_url": string}`.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl SubmitError {
    /// User-facing notice text.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::EmptyInput => EMPTY_INPUT_NOTICE.to_owned(),
            Self::InFlight => IN_FLIGHT_NOTICE.to_owned(),
            Self::Service { body, .. } => body.clone(),
            Self::Transport(detail) => format!("Request failed: {detail}"),
            Self::Decode(detail) => format!("Unexpected response: {detail}"),
        }
    }
}
