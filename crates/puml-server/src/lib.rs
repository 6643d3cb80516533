//! `PlantUML` rendering server client.
//!
//! Everything needed to turn an encoded diagram token into a rendered
//! artifact:
//! - [`render_url`]: validated URL construction (`<server>/<format>/<token>`)
//! - [`fetch_rendered`]: blocking HTTP GET of the artifact bytes
//! - [`OutputFormat`]: supported artifact formats
//!
//! Requests are made once, with a global timeout; retries are left to the
//! caller.

mod consts;
mod error;
mod format;

use std::time::Duration;

use tracing::debug;
use ureq::Agent;
use url::Url;

pub use consts::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT};
pub use error::RenderError;
pub use format::OutputFormat;

/// Create an HTTP agent with the given global timeout.
///
/// Reuse one agent across a batch for connection pooling.
#[must_use]
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Build the render URL for an encoded diagram token.
///
/// The format and token become successive path segments:
/// `<server>/<format>/<token>`. A trailing slash on the server base is
/// tolerated and never produces a double slash.
pub fn render_url(
    server: &str,
    format: OutputFormat,
    token: &str,
) -> Result<String, RenderError> {
    let mut url = Url::parse(server).map_err(|e| RenderError::InvalidServerUrl {
        url: server.to_owned(),
        reason: e.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|()| RenderError::InvalidServerUrl {
            url: server.to_owned(),
            reason: "cannot be a base URL".to_owned(),
        })?
        .pop_if_empty()
        .push(format.as_str())
        .push(token);
    Ok(url.into())
}

/// Fetch a rendered artifact over HTTP GET.
///
/// Returns the response body on HTTP 200; any other status is an error
/// carrying the link so callers can report it. A single attempt is made.
pub fn fetch_rendered(agent: &Agent, url: &str) -> Result<Vec<u8>, RenderError> {
    debug!(url, "fetching rendered artifact");

    let response = agent.get(url).call().map_err(|e| RenderError::Http {
        url: url.to_owned(),
        message: e.to_string(),
    })?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(RenderError::Status {
            status,
            url: url.to_owned(),
        });
    }

    response
        .into_body()
        .read_to_vec()
        .map_err(|e| RenderError::Io {
            url: url.to_owned(),
            message: e.to_string(),
        })
}
