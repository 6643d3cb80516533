//! 64-symbol text encoding stage.
//!
//! Same 6-bit grouping as base64, different symbol table: digits first,
//! then uppercase, lowercase, `-`, `_`, and no padding character. The
//! server decodes with this exact table, so the index order is part of the
//! wire contract and must never change.

/// Symbol table, index-order significant: `0-9`, `A-Z`, `a-z`, `-`, `_`.
pub const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Map one 6-bit value to its symbol.
fn symbol(value: u8) -> char {
    ALPHABET[usize::from(value & 0x3F)] as char
}

/// Encode bytes as a `PlantUML` URL token.
///
/// Input is consumed in 3-byte groups, each yielding four 6-bit symbols.
/// Missing bytes in a trailing partial group are treated as zero, so the
/// final group still yields four symbols and the output length is always
/// `ceil(len / 3) * 4`. Empty input yields an empty token.
#[must_use]
pub fn encode64(data: &[u8]) -> String {
    let mut token = String::with_capacity(data.len().div_ceil(3) * 4);
    for group in data.chunks(3) {
        let b1 = group[0];
        let b2 = group.get(1).copied().unwrap_or(0);
        let b3 = group.get(2).copied().unwrap_or(0);
        token.push(symbol(b1 >> 2));
        token.push(symbol(((b1 & 0x3) << 4) | (b2 >> 4)));
        token.push(symbol(((b2 & 0xF) << 2) | (b3 >> 6)));
        token.push(symbol(b3 & 0x3F));
    }
    token
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Deflate stream for `@startuml\nBob -> Alice : hello\n@enduml`,
    /// known to decode on the public server via the token below.
    const HELLO_DEFLATED: [u8; 44] = [
        0x72, 0x28, 0x2e, 0x49, 0x2c, 0x2a, 0x29, 0xcd, 0xcd, 0xe1, 0x72,
        0xca, 0x4f, 0x52, 0xd0, 0xb5, 0x53, 0x70, 0xcc, 0xc9, 0x4c, 0x4e,
        0x55, 0xb0, 0x52, 0xc8, 0x48, 0xcd, 0xc9, 0xc9, 0xe7, 0x72, 0x48,
        0xcd, 0x4b, 0x29, 0xcd, 0xcd, 0x01, 0x04, 0x00, 0x00, 0xff, 0xff,
    ];

    #[test]
    fn test_hello_token_bit_exact() {
        assert_eq!(
            encode64(&HELLO_DEFLATED),
            "SYWkIImgAStDuNBAJrBGjLDmpCbCJbMmKiX8pSd9vt98pKifpSq11000__y0"
        );
    }

    #[test]
    fn test_partial_group_padding() {
        // 1, 2, and 3 real bytes in the final group all yield 4 symbols.
        assert_eq!(encode64(b"a"), "OG00");
        assert_eq!(encode64(b"ab"), "OM80");
        assert_eq!(encode64(b"abc"), "OM9Z");
        assert_eq!(encode64(b"abcd"), "OM9ZP000");
    }

    #[test]
    fn test_length_law() {
        for len in 0..64usize {
            let data = vec![0xA5; len];
            assert_eq!(encode64(&data).len(), len.div_ceil(3) * 4, "len {len}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode64(b""), "");
    }

    #[test]
    fn test_alphabet_boundaries() {
        // Index 0 maps to '0', 62 to '-', 63 to '_'.
        assert_eq!(encode64(&[0x00, 0x00, 0x00]), "0000");
        assert_eq!(encode64(&[0xF8, 0x00, 0x00]), "-000");
        assert_eq!(encode64(&[0xFF, 0xFF, 0xFF]), "____");
        assert_eq!(encode64(&[0x00, 0x00, 0xFF]), "003_");
    }

    #[test]
    fn test_alphabet_closure() {
        // Every byte value in every group position stays inside the table.
        let data: Vec<u8> = (0..=255u8).collect();
        for offset in 0..3 {
            let token = encode64(&data[offset..]);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut seen = [false; 256];
        for &sym in ALPHABET {
            assert!(!seen[usize::from(sym)], "duplicate symbol {}", sym as char);
            seen[usize::from(sym)] = true;
        }
    }
}
