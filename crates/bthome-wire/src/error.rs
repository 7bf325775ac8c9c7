/// Low-level byte framing errors.
///
/// Every variant that points into a buffer carries the absolute byte
/// offset where the read failed, so a caller holding the original
/// advertisement can line the error up with a hex dump.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// Input ended before `needed` bytes could be read at `offset`.
    #[error("unexpected end of input at offset {offset} (needed {needed} bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// An integer read was requested with a width outside 1..=4 bytes.
    #[error("unsupported integer width {width}, expected 1..=4")]
    UnsupportedWidth { width: usize },

    /// A hex string could not be normalized into bytes.
    #[error("invalid hex input: {reason}")]
    InvalidHex { reason: String },
}
