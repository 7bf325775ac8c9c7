use bthome_wire::WireError;

/// Errors raised while turning a field's bytes into a [`ReadingValue`].
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                               │
/// │   ├── InvalidDescriptor  ← defect in the field table │
/// │   ├── TimestampOutOfRange                            │
/// │   └── wraps WireError for short or odd-width reads   │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// [`ReadingValue`]: crate::value::ReadingValue
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
  /// A table entry cannot be decoded as declared, e.g. an integer
  /// field whose width is outside 1..=4 or whose scale is not a
  /// positive finite number. Never caused by input bytes.
  #[error("invalid descriptor for object id {id:#04X} ({name}): {reason}")]
  InvalidDescriptor {
    id: u8,
    name: &'static str,
    reason: &'static str,
  },

  /// Two table entries claim the same object id, or the table is not
  /// sorted by id.
  #[error("field table is not strictly ordered at object id {id:#04X}")]
  TableOrder { id: u8 },

  /// A timestamp field held seconds that chrono cannot represent.
  #[error("timestamp {seconds} is out of range")]
  TimestampOutOfRange { seconds: u32 },

  #[error(transparent)]
  Wire(#[from] WireError),
}
