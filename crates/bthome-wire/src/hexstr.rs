use std::fmt::Write as _;

use crate::error::WireError;

/// Lowercase hex with no separators: `[0xDE, 0xAD]` → `"dead"`.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Lowercase hex tagged with a `0x` prefix, used for opaque fragments.
pub fn tagged_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Render bytes as lowercase colon-separated pairs, e.g. a device address
/// `aa:bb:cc:dd:ee:ff`.
pub fn colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 3), |mut s, b| {
            if !s.is_empty() {
                s.push(':');
            }
            let _ = write!(s, "{b:02x}");
            s
        })
}

/// Turn user-supplied hex text into bytes.
///
/// All whitespace is stripped, an optional leading `0x`/`0X` is dropped,
/// and either case is accepted.
///
/// # Errors
///
/// Returns [`WireError::InvalidHex`] for odd-length input or non-hex
/// characters.
pub fn normalize_hex(input: &str) -> Result<Vec<u8>, WireError> {
    hex::decode(hex_digits(input)).map_err(|e| WireError::InvalidHex {
        reason: e.to_string(),
    })
}

/// Lenient form of [`normalize_hex`]: decodes the longest leading run of
/// valid hex pairs. A trailing odd nibble is dropped and the first pair
/// that is not hex ends the run.
pub fn leading_hex_bytes(input: &str) -> Vec<u8> {
    hex_digits(input)
        .as_bytes()
        .chunks_exact(2)
        .map_while(|pair| {
            let mut byte = [0u8; 1];
            hex::decode_to_slice(pair, &mut byte).ok().map(|()| byte[0])
        })
        .collect()
}

/// Input with whitespace and an optional `0x`/`0X` prefix removed.
fn hex_digits(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    match compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
    {
        Some(rest) => rest.to_owned(),
        None => compact,
    }
}
