use bthome_wire::hexstr::{colon_hex, leading_hex_bytes};
use bthome_wire::int::{read_uint_le, take};
use serde::Serialize;
use tracing::debug;

use crate::models;

/// Bluetooth SIG company identifier the manufacturer data must start with.
pub const SHELLY_COMPANY_ID: u16 = 0x0BA9;

/// Shortest manufacturer data block worth parsing.
pub const MIN_VENDOR_LEN: usize = 10;

const BLOCK_FLAGS: u8 = 0x01;
const BLOCK_MAC: u8 = 0x0A;
const BLOCK_MODEL: u8 = 0x0B;

const MAC_LEN: usize = 6;

/// Device state bits from the flags block.
///
/// ```text
/// ┌─────┬─────────────────┐
/// │ Bit │ Flag            │
/// ├─────┼─────────────────┤
/// │ 0   │ discoverable    │
/// │ 1   │ auth_enabled    │
/// │ 2   │ rpc_enabled     │
/// │ 3   │ buzzer_enabled  │
/// │ 4   │ in_pairing_mode │
/// └─────┴─────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorFlags {
    pub discoverable: bool,
    pub auth_enabled: bool,
    pub rpc_enabled: bool,
    pub buzzer_enabled: bool,
    pub in_pairing_mode: bool,
}

impl VendorFlags {
    pub fn from_raw(raw: u32) -> Self {
        let bit = |n: u32| raw & (1 << n) != 0;
        Self {
            discoverable: bit(0),
            auth_enabled: bit(1),
            rpc_enabled: bit(2),
            buzzer_enabled: bit(3),
            in_pairing_mode: bit(4),
        }
    }
}

/// Identity fields recovered from a manufacturer data block.
/// Blocks that were not present stay `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorData {
    pub company_id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<VendorFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id_short_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id_long_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

/// Decoder for the vendor manufacturer data block.
///
/// Layout after the 2-byte little-endian company id is a run of
/// `type │ payload` blocks:
///
/// ```text
/// ┌──────┬─────────┬──────────────────────────────┐
/// │ Type │ Payload │ Meaning                      │
/// ├──────┼─────────┼──────────────────────────────┤
/// │ 0x01 │ 2 bytes │ flags bitfield (LE)          │
/// │ 0x0A │ 6 bytes │ device MAC address           │
/// │ 0x0B │ 2 bytes │ model id (LE)                │
/// └──────┴─────────┴──────────────────────────────┘
/// ```
///
/// Blocks carry no length, so an unrecognized type or a block cut short
/// ends parsing and whatever was collected so far is returned.
pub struct VendorDecoder;

impl VendorDecoder {
    /// Decode manufacturer data bytes, company id included.
    ///
    /// Returns `None` if the buffer is shorter than [`MIN_VENDOR_LEN`]
    /// or does not start with [`SHELLY_COMPANY_ID`].
    pub fn decode(data: &[u8]) -> Option<VendorData> {
        if data.len() < MIN_VENDOR_LEN {
            debug!(len = data.len(), "manufacturer data too short");
            return None;
        }
        let company_id = u16::from_le_bytes([data[0], data[1]]);
        if company_id != SHELLY_COMPANY_ID {
            debug!(company_id, "manufacturer data from another vendor");
            return None;
        }

        let mut result = VendorData {
            company_id,
            flags: None,
            model_id: None,
            model_id_short_name: None,
            model_id_long_name: None,
            mac: None,
        };
        let mut cursor = 2;

        while cursor < data.len() {
            let block = data[cursor];
            cursor += 1;
            match block {
                BLOCK_FLAGS => {
                    let Ok(raw) = read_uint_le(data, cursor, 2) else {
                        break;
                    };
                    result.flags = Some(VendorFlags::from_raw(raw));
                    cursor += 2;
                }
                BLOCK_MODEL => {
                    let Ok(bytes) = take(data, cursor, 2) else {
                        break;
                    };
                    let model_id = u16::from_le_bytes([bytes[0], bytes[1]]);
                    result.model_id = Some(model_id);
                    result.model_id_short_name = models::short_name(model_id);
                    result.model_id_long_name = models::long_name(model_id);
                    cursor += 2;
                }
                BLOCK_MAC => {
                    let Ok(mac) = take(data, cursor, MAC_LEN) else {
                        break;
                    };
                    result.mac = Some(colon_hex(mac));
                    cursor += MAC_LEN;
                }
                other => {
                    debug!(block = other, offset = cursor - 1, "unknown block type, stopping");
                    break;
                }
            }
        }

        Some(result)
    }

    /// Decode manufacturer data given as hex text. Whitespace and a
    /// leading `0x` are ignored. Decoding uses the longest leading run of
    /// valid hex pairs, so a stray trailing nibble or junk after the data
    /// does not hide it; [`decode`](Self::decode) decides the rest.
    pub fn decode_hex(text: &str) -> Option<VendorData> {
        Self::decode(&leading_hex_bytes(text))
    }
}
