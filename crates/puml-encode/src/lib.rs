//! Diagram source encoding for `PlantUML` server URLs.
//!
//! A `PlantUML` server addresses diagrams by a text token embedded in the
//! URL path. The token is produced in two stages:
//! - [`deflate_raw`]: raw-DEFLATE compression (RFC 1951, no zlib/gzip framing)
//! - [`encode64`]: a 64-symbol text encoding over `0-9A-Za-z-_`
//!
//! [`encode_diagram`] composes both stages. The transform is deterministic
//! for a fixed input and the server inverts it exactly: symbol-inverse,
//! then inflate, discarding the zero bytes the final symbol group may have
//! been padded with.

mod compress;
mod error;
mod textcode;

pub use compress::{EMPTY_DEFLATE_LEN, deflate_raw};
pub use error::EncodeError;
pub use textcode::{ALPHABET, encode64};

/// Encode diagram source into a `PlantUML` server URL token.
///
/// The intermediate compressed buffer only lives inside this call; callers
/// see bytes in, token out.
pub fn encode_diagram(raw: &[u8]) -> Result<String, EncodeError> {
    let compressed = deflate_raw(raw)?;
    Ok(encode64(&compressed))
}
