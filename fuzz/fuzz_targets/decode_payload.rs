#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: BtHomeDecoder::decode on arbitrary service data.
//
// Only an empty buffer may be refused. Everything else must decode, and
// a non-empty `unknown` list must hold exactly one fragment.
fuzz_target!(|data: &[u8]| {
    match bthome_decoder::BtHomeDecoder::decode(data) {
        Ok(decoded) => assert!(decoded.unknown.len() <= 1),
        Err(e) => {
            assert!(data.is_empty(), "non-empty payload refused: {e}");
        }
    }
});
