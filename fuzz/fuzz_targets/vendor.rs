#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: VendorDecoder::decode on arbitrary manufacturer data.
//
// Catches bugs in:
// - Block walking past the end of the buffer
// - Model id lookups
fuzz_target!(|data: &[u8]| {
    if let Some(vendor) = bthome_decoder::VendorDecoder::decode(data) {
        assert_eq!(vendor.company_id, bthome_decoder::SHELLY_COMPANY_ID);
    }
});
