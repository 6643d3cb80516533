//! Encoder error types.

/// Error produced by the encoding pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The DEFLATE writer failed while compressing in-memory data.
    #[error("deflate stream failed: {0}")]
    Deflate(#[from] std::io::Error),
}
