//! Shared submission flow for the URL shortener front ends.
//!
//! This crate owns the pieces both `client` (browser) and `cli` drive: the
//! `/shorten` wire schema, endpoint configuration, the error taxonomy, and the
//! form state machine that wraps a single in-flight request. It performs no
//! I/O itself; callers plug an HTTP implementation in through [`Transport`].
//!
//! FLOW
//! ====
//! `FormState::begin` validates the draft and raises the loading flag,
//! the caller awaits its transport, and `FormState::settle` lowers the flag
//! and classifies the reply. `FormState::submit` composes the three for
//! callers that can hold the form across an await.

pub mod endpoint;
pub mod error;
pub mod form;
pub mod result;
pub mod transport;
pub mod wire;

pub use endpoint::{BASE_URL_ENV, DEFAULT_BASE_URL, Endpoint, EndpointError};
pub use error::SubmitError;
pub use form::{FormState, IDLE_LABEL, LOADING_LABEL};
pub use result::{RESULT_LABEL, ResultSlot, display_text};
pub use transport::{HttpReply, Transport};
pub use wire::{SHORTEN_PATH, ShortenRequest, ShortenResponse};
