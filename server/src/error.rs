//! Startup and serve errors for the UI host.

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind listener: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
