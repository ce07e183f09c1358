//! HTTP seam between the form state machine and a concrete client.
//!
//! Implementations post a JSON body and hand back the raw status and body
//! text. Classifying the reply belongs to [`crate::FormState::settle`], so
//! every client gets identical success/failure semantics.

/// Raw HTTP response: status code and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xx check, matching `fetch`'s `Response.ok`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts JSON to a URL.
///
/// The returned future is not required to be `Send`; the browser transport
/// runs on a single-threaded executor.
pub trait Transport {
    /// Send `POST {url}` with `Content-Type: application/json` and `body`.
    ///
    /// Resolves to `Err(detail)` only when no HTTP response was obtained.
    fn post_json(&self, url: &str, body: String) -> impl Future<Output = Result<HttpReply, String>>;
}
