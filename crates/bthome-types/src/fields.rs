use bthome_wire::hexstr::to_hex;
use bthome_wire::int::{MAX_INT_WIDTH, read_int_le, read_uint_le};
use chrono::{DateTime, SecondsFormat};

use crate::enums::{ButtonEvent, DimmerEventKind};
use crate::error::TypeError;
use crate::value::ReadingValue;

/// Upper bound on rounding precision. Every scale in the table resolves
/// well below this.
const MAX_DECIMALS: i32 = 9;

/// How a field's value is encoded after its object id byte.
///
/// ```text
/// ┌───────────────┬─────────┬──────────────────────────────────────┐
/// │ Kind          │ Width   │ Value                                │
/// ├───────────────┼─────────┼──────────────────────────────────────┤
/// │ Integer       │ 1..=4   │ LE int × scale, rounded              │
/// │ ButtonEvent   │ 1       │ press pattern label                  │
/// │ DimmerEvent   │ 2       │ { event, steps }                     │
/// │ Timestamp     │ 4       │ ISO-8601 UTC string                  │
/// │ FirmwareLong  │ 4       │ "b3.b2.b1.b0"                        │
/// │ FirmwareShort │ 3       │ "b2.b1.b0"                           │
/// │ Text          │ 1 + len │ UTF-8 (lossy)                        │
/// │ Raw           │ 1 + len │ lowercase hex                        │
/// └───────────────┴─────────┴──────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Integer { width: u8, signed: bool, scale: f64 },
    ButtonEvent,
    DimmerEvent,
    Timestamp,
    FirmwareLong,
    FirmwareShort,
    Text,
    Raw,
}

/// Number of payload bytes following the object id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    Fixed(usize),
    /// First payload byte is the count of bytes that follow it.
    LengthPrefixed,
}

impl FieldKind {
    pub fn width(&self) -> FieldWidth {
        match self {
            Self::Integer { width, .. } => FieldWidth::Fixed(usize::from(*width)),
            Self::ButtonEvent => FieldWidth::Fixed(1),
            Self::DimmerEvent => FieldWidth::Fixed(2),
            Self::FirmwareShort => FieldWidth::Fixed(3),
            Self::Timestamp | Self::FirmwareLong => FieldWidth::Fixed(4),
            Self::Text | Self::Raw => FieldWidth::LengthPrefixed,
        }
    }
}

/// One row of the field table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub id: u8,
    /// Reading key. Not unique: several ids share a name.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Check the entry is decodable as declared.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidDescriptor`] for an integer width
    /// outside 1..=4 or a scale that is not positive and finite.
    pub fn validate(&self) -> Result<(), TypeError> {
        if let FieldKind::Integer { width, scale, .. } = self.kind {
            if width == 0 || usize::from(width) > MAX_INT_WIDTH {
                return Err(self.defect("integer width must be 1..=4 bytes"));
            }
            if !scale.is_finite() || scale <= 0.0 {
                return Err(self.defect("scale must be a positive finite number"));
            }
        }
        Ok(())
    }

    /// Total bytes the field occupies after its id, given the buffer and
    /// the offset of the first payload byte.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::Wire`] if a length prefix is missing.
    pub fn encoded_len(&self, buf: &[u8], offset: usize) -> Result<usize, TypeError> {
        match self.kind.width() {
            FieldWidth::Fixed(n) => Ok(n),
            FieldWidth::LengthPrefixed => {
                let len = read_uint_le(buf, offset, 1)?;
                Ok(1 + len as usize)
            }
        }
    }

    /// Decode the field from exactly its payload bytes (length prefix
    /// included for length-prefixed kinds).
    ///
    /// # Errors
    ///
    /// - [`TypeError::InvalidDescriptor`] if the entry fails [`validate`](Self::validate).
    /// - [`TypeError::Wire`] if `payload` is shorter than the kind needs.
    pub fn decode_value(&self, payload: &[u8]) -> Result<ReadingValue, TypeError> {
        self.validate()?;
        let value = match self.kind {
            FieldKind::Integer {
                width,
                signed,
                scale,
            } => {
                let width = usize::from(width);
                let raw = if signed {
                    i64::from(read_int_le(payload, 0, width)?)
                } else {
                    i64::from(read_uint_le(payload, 0, width)?)
                };
                ReadingValue::Number(apply_scale(raw, scale))
            }
            FieldKind::ButtonEvent => {
                let code = read_uint_le(payload, 0, 1)?;
                ReadingValue::from(ButtonEvent::from_wire_byte(low_byte(code)).as_str())
            }
            FieldKind::DimmerEvent => {
                let event = DimmerEventKind::from_wire_byte(low_byte(read_uint_le(payload, 0, 1)?));
                let steps = low_byte(read_uint_le(payload, 1, 1)?);
                ReadingValue::Dimmer { event, steps }
            }
            FieldKind::Timestamp => {
                let seconds = read_uint_le(payload, 0, 4)?;
                let at = DateTime::from_timestamp(i64::from(seconds), 0)
                    .ok_or(TypeError::TimestampOutOfRange { seconds })?;
                ReadingValue::Text(at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            FieldKind::FirmwareLong => {
                let b = bthome_wire::int::take(payload, 0, 4)?;
                ReadingValue::Text(format!("{}.{}.{}.{}", b[3], b[2], b[1], b[0]))
            }
            FieldKind::FirmwareShort => {
                let b = bthome_wire::int::take(payload, 0, 3)?;
                ReadingValue::Text(format!("{}.{}.{}", b[2], b[1], b[0]))
            }
            FieldKind::Text => ReadingValue::Text(String::from_utf8_lossy(prefixed(payload)?).into_owned()),
            FieldKind::Raw => ReadingValue::Text(to_hex(prefixed(payload)?)),
        };
        Ok(value)
    }

    fn defect(&self, reason: &'static str) -> TypeError {
        TypeError::InvalidDescriptor {
            id: self.id,
            name: self.name,
            reason,
        }
    }
}

/// Body of a length-prefixed payload.
fn prefixed(payload: &[u8]) -> Result<&[u8], TypeError> {
    let len = read_uint_le(payload, 0, 1)? as usize;
    Ok(bthome_wire::int::take(payload, 1, len)?)
}

#[allow(clippy::cast_possible_truncation)]
fn low_byte(value: u32) -> u8 {
    value as u8
}

/// Decimal places implied by `scale`: `log10(1 / scale)` truncated and
/// never negative. 0.01 → 2, 0.1 → 1, 1 → 0, and 0.35 → 0.
#[allow(clippy::cast_possible_truncation)]
pub fn decimals(scale: f64) -> i32 {
    let places = (1.0 / scale).log10().trunc();
    places.clamp(0.0, f64::from(MAX_DECIMALS)) as i32
}

/// Multiply a raw integer by `scale` and round to the precision of the
/// scale, so 2500 × 0.01 yields exactly 25.0 rather than 25.000000000000004.
#[allow(clippy::cast_precision_loss)]
pub fn apply_scale(raw: i64, scale: f64) -> f64 {
    let factor = 10f64.powi(decimals(scale));
    (raw as f64 * scale * factor).round() / factor
}
