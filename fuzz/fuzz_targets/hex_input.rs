#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: hex text normalization as used by the CLI and
// VendorDecoder::decode_hex.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(bytes) = bthome_wire::hexstr::normalize_hex(text) {
        let _ = bthome_decoder::BtHomeDecoder::decode(&bytes);
    }
    let _ = bthome_decoder::VendorDecoder::decode_hex(text);
});
