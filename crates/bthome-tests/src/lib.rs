//! Captured advertisement payloads shared by the integration tests and
//! benchmarks.

/// Temperature/humidity sensor: packet id, battery, 1-byte humidity,
/// 0.01 °C temperature.
pub const HT_SENSOR: &[u8] = &[0x40, 0x00, 0xA4, 0x01, 0x64, 0x2E, 0x2E, 0x02, 0xAA, 0x09];

/// Trigger-based button: packet id, battery, double press.
pub const BUTTON_DOUBLE: &[u8] = &[0x44, 0x00, 0x12, 0x01, 0x5A, 0x3A, 0x02];

/// Four-button remote reporting one event per button.
pub const BUTTON_FOUR: &[u8] = &[0x44, 0x3A, 0x00, 0x3A, 0x01, 0x3A, 0x00, 0x3A, 0x04];

/// One of every custom kind plus several scaled integers.
pub const KITCHEN_SINK: &[u8] = &[
    0x40, //
    0x00, 0x07, // packet id
    0x01, 0x5A, // battery
    0x02, 0x0C, 0x08, // temperature 20.60
    0x03, 0x8C, 0x13, // humidity 50.04
    0x04, 0x13, 0x8A, 0x01, // pressure 1008.83
    0x0C, 0xB8, 0x0B, // voltage 3.000
    0x2D, 0x01, // window
    0x3A, 0x01, // button
    0x3C, 0x01, 0x02, // dimmer
    0x50, 0xA0, 0xF0, 0xCE, 0x5D, // timestamp
    0x53, 0x02, b'o', b'k', // text
    0xF0, 0x01, 0x00, // device type id
    0xF1, 0x00, 0x01, 0x02, 0x04, // firmware 4.2.1.0
];

/// Vendor manufacturer data with flags, model and MAC blocks.
pub const VENDOR_FULL: &[u8] = &[
    0xA9, 0x0B, 0x01, 0x05, 0x00, 0x0B, 0x03, 0x00, 0x0A, 0x3C, 0x2E, 0xF5, 0x90, 0x12, 0x7D,
];

/// Parse a hex fixture written with spaces.
///
/// # Panics
///
/// Panics on malformed hex; fixtures are authored by hand.
pub fn bytes(hex_text: &str) -> Vec<u8> {
    let compact: String = hex_text.split_whitespace().collect();
    hex::decode(compact).unwrap_or_else(|e| panic!("bad fixture {hex_text:?}: {e}"))
}
