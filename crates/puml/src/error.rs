//! CLI error types.

use puml_encode::EncodeError;
use puml_server::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Encode(#[from] EncodeError),

    #[error("{0}")]
    Render(#[from] RenderError),
}
