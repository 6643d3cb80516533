//! Server client error types.

/// Error raised while building a render URL or fetching an artifact.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The configured server base is not a syntactically valid URL.
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    /// Transport-level failure: DNS, connect, TLS, or timeout.
    #[error("request failed for {url}: {message}")]
    Http { url: String, message: String },

    /// The server answered with something other than HTTP 200.
    #[error("error in fetching {url}: HTTP {status}")]
    Status { status: u16, url: String },

    /// The response body could not be read.
    #[error("failed to read response from {url}: {message}")]
    Io { url: String, message: String },
}
