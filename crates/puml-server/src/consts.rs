//! Client constants.

use std::time::Duration;

/// Public PlantUML rendering server.
pub const DEFAULT_SERVER_URL: &str = "http://plantuml.com/plantuml";

/// Default HTTP timeout for render requests (30 seconds).
///
/// Applied globally to the request, so a stalled server cannot hang a
/// batch indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
