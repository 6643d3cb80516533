//! Raw-DEFLATE compression stage.
//!
//! Produces an RFC 1951 stream with no zlib/gzip container header or
//! trailing checksum. The server inflates the token payload bare, so any
//! framing here would break decoding on its side.

use std::io::Write;

use flate2::Compression;
use flate2::write::DeflateEncoder;

use crate::error::EncodeError;

/// Length of the raw DEFLATE stream for empty input.
///
/// An empty payload still compresses to a minimal two-byte stream (a
/// fixed-Huffman end-of-block marker), so the token for empty input is one
/// four-symbol group rather than an empty string or an error.
pub const EMPTY_DEFLATE_LEN: usize = 2;

/// Compress diagram source with raw DEFLATE at maximum compression.
///
/// The encoder is finalized before the buffer is returned; DEFLATE writers
/// hold data back until `finish`, and an unfinished stream would be
/// truncated mid-block.
pub fn deflate_raw(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}
