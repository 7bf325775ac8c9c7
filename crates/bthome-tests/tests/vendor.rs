//! End-to-end tests for the vendor manufacturer data decoder.

use bthome_decoder::{SHELLY_COMPANY_ID, VendorDecoder};
use bthome_tests::VENDOR_FULL;
use insta::assert_snapshot;

#[test]
fn full_block() {
    let data = VendorDecoder::decode(VENDOR_FULL).expect("vendor data");
    assert_snapshot!(
        serde_json::to_string(&data).unwrap(),
        @r#"{"companyId":2985,"flags":{"discoverable":true,"authEnabled":false,"rpcEnabled":true,"buzzerEnabled":false,"inPairingMode":false},"modelId":3,"modelIdShortName":"SBHT-003C","modelIdLongName":"Shelly BLU H&T","mac":"3c:2e:f5:90:12:7d"}"#
    );
}

#[test]
fn any_buffer_under_ten_bytes_is_rejected() {
    for len in 0..10 {
        assert_eq!(VendorDecoder::decode(&VENDOR_FULL[..len]), None, "len {len}");
    }
    assert!(VendorDecoder::decode(&VENDOR_FULL[..10]).is_some());
}

#[test]
fn every_other_company_is_rejected() {
    let mut data = VENDOR_FULL.to_vec();
    for company in [0x0000_u16, 0x004C, 0x0BA8, 0xA90B, 0xFFFF] {
        data[..2].copy_from_slice(&company.to_le_bytes());
        assert_eq!(VendorDecoder::decode(&data), None, "company {company:#06X}");
    }
    data[..2].copy_from_slice(&SHELLY_COMPANY_ID.to_le_bytes());
    assert!(VendorDecoder::decode(&data).is_some());
}

#[test]
fn hex_and_bytes_agree() {
    let text = "A9 0B 01 05 00 0B 03 00 0A 3C 2E F5 90 12 7D";
    assert_eq!(
        VendorDecoder::decode_hex(text),
        VendorDecoder::decode(VENDOR_FULL)
    );
    assert_eq!(
        VendorDecoder::decode_hex(&format!("0x{}", hex::encode(VENDOR_FULL))),
        VendorDecoder::decode(VENDOR_FULL)
    );
}

#[test]
fn odd_length_hex_still_decodes() {
    let text = format!("{}f", hex::encode(VENDOR_FULL));
    assert_eq!(text.len() % 2, 1);
    assert_eq!(
        VendorDecoder::decode_hex(&text),
        VendorDecoder::decode(VENDOR_FULL)
    );
}

#[test]
fn hex_preconditions_decide_rejection() {
    // ten valid bytes, then junk
    assert!(VendorDecoder::decode_hex("a90b0b0300 0a3c2ef590 xyz").is_some());
    // nine valid bytes before the junk
    assert_eq!(VendorDecoder::decode_hex("a90b0b0300 0a3c2ef5 xyz"), None);
}

#[test]
fn unknown_block_keeps_what_came_before() {
    let data = VendorDecoder::decode(&[
        0xA9, 0x0B, 0x0B, 0x02, 0x00, 0x77, 0x01, 0x1F, 0x00, 0x00,
    ])
    .expect("vendor data");
    assert_eq!(data.model_id_long_name, Some("Shelly BLU Door/Window"));
    assert_eq!(data.flags, None);
    assert_eq!(data.mac, None);
}
