use bthome_types::TypeError;

/// Errors returned by [`BtHomeDecoder::decode`](crate::BtHomeDecoder::decode).
///
/// Bad advertisement bytes are not errors: unknown ids and truncated
/// fields end up in the result's `unknown` tail. What remains is a
/// violated precondition or a defect in the field table.
///
/// ```text
///   DecodeError
///   ├── EmptyPayload        ← no header byte at all
///   └── Type(TypeError)     ← table row cannot be decoded as declared
/// ```
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer did not even contain the header byte.
    #[error("service data payload is empty")]
    EmptyPayload,

    /// A field table entry is internally inconsistent. This is a
    /// programming error in the table, not a property of the input.
    #[error(transparent)]
    Type(#[from] TypeError),
}
