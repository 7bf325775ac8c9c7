use std::collections::HashMap;

use bthome_types::{FieldDescriptor, Readings, lookup};
use bthome_wire::hexstr::tagged_hex;
use bthome_wire::header::HEADER_SIZE;
use bthome_wire::int::take;
use bthome_wire::{PacketHeader, SERVICE_UUID};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::DecodeError;

/// The result of decoding one BTHome v2 service data payload.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ DecodedReadingSet                                    │
/// │   version   ← header bits 5-7                        │
/// │   encrypted ← header bit 0                           │
/// │   trigger   ← header bit 2                           │
/// │   readings  ← key → value, in wire order             │
/// │   unknown   ← hex of bytes left after decoding stops │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DecodedReadingSet {
    pub version: u8,
    pub encrypted: bool,
    pub trigger: bool,
    pub readings: Readings,
    /// Each entry is `0x` followed by the undecoded bytes, starting with
    /// the object id that stopped the walk.
    pub unknown: Vec<String>,
}

/// Hands out reading keys and disambiguates repeated names.
///
/// The first occurrence of a name is keyed by the bare name. On the
/// second occurrence the existing entry is renamed to `name:1` and the
/// new one is keyed `name:2`; later ones continue `name:3`, `name:4`.
#[derive(Default)]
struct KeyAllocator {
    seen: HashMap<&'static str, u32>,
}

impl KeyAllocator {
    fn allocate(&mut self, name: &'static str, readings: &mut Readings) -> String {
        let count = self.seen.entry(name).or_insert(0);
        *count += 1;
        match *count {
            1 => name.to_owned(),
            2 => {
                readings.rename(name, format!("{name}:1"));
                format!("{name}:2")
            }
            n => format!("{name}:{n}"),
        }
    }
}

/// Stateless BTHome v2 decoder.
///
/// Decoding walks the payload once:
///
///   1. **Header**: byte 0 yields version, encrypted and trigger.
///   2. **Fields**: from offset 1, read an object id and look it up in
///      the field table. Known ids are decoded and the cursor advances
///      by the field's fixed width, or by one plus its length prefix.
///   3. **Stop**: an unknown id, or a known id without enough bytes
///      behind it, ends the walk. The bytes from that id onward are kept
///      as one hex entry in `unknown`; without the field's width there
///      is no way to find the next id.
///
/// # Example
///
/// ```rust
/// use bthome_decoder::BtHomeDecoder;
///
/// let decoded = BtHomeDecoder::decode(&[0x40, 0x02, 0xCE, 0xFF, 0x01, 0x64]).unwrap();
/// assert_eq!(decoded.version, 2);
/// assert_eq!(decoded.readings.get("temperature").unwrap().as_f64(), Some(-0.5));
/// assert_eq!(decoded.readings.get("battery").unwrap().as_f64(), Some(100.0));
/// ```
pub struct BtHomeDecoder;

impl BtHomeDecoder {
    /// Decode one service data payload, header byte included.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EmptyPayload`] if `payload` has no header byte.
    /// - [`DecodeError::Type`] if a field table row is defective. No
    ///   input can cause this with the shipped table.
    pub fn decode(payload: &[u8]) -> Result<DecodedReadingSet, DecodeError> {
        let header = PacketHeader::read_from(payload).map_err(|_| DecodeError::EmptyPayload)?;

        let mut result = DecodedReadingSet {
            version: header.version,
            encrypted: header.is_encrypted(),
            trigger: header.is_trigger(),
            ..DecodedReadingSet::default()
        };
        let mut keys = KeyAllocator::default();
        let mut cursor = HEADER_SIZE;

        while cursor < payload.len() {
            let id = payload[cursor];

            let Some(descriptor) = lookup(id) else {
                debug!(id, offset = cursor, "unknown object id, stopping");
                result.unknown.push(tagged_hex(&payload[cursor..]));
                break;
            };
            descriptor.validate()?;

            let Some(field) = Self::field_bytes(descriptor, payload, cursor + 1) else {
                debug!(id, offset = cursor, name = descriptor.name, "truncated field, stopping");
                result.unknown.push(tagged_hex(&payload[cursor..]));
                break;
            };

            let value = descriptor.decode_value(field)?;
            let key = keys.allocate(descriptor.name, &mut result.readings);
            trace!(id, offset = cursor, key = %key, value = %value, "decoded field");
            result.readings.insert(key, value);

            cursor += 1 + field.len();
        }

        Ok(result)
    }

    /// Pick the BTHome entry out of a map of 16-bit service data UUIDs
    /// and decode it. Returns `None` when the advertisement carries no
    /// BTHome service data.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_service_data(
        service_data: &HashMap<u16, Vec<u8>>,
    ) -> Option<Result<DecodedReadingSet, DecodeError>> {
        service_data
            .get(&SERVICE_UUID)
            .map(|payload| Self::decode(payload))
    }

    /// The bytes of one field, or `None` if the payload ends first.
    fn field_bytes<'a>(
        descriptor: &FieldDescriptor,
        payload: &'a [u8],
        offset: usize,
    ) -> Option<&'a [u8]> {
        let len = descriptor.encoded_len(payload, offset).ok()?;
        take(payload, offset, len).ok()
    }
}
