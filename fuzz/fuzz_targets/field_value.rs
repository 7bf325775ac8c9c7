#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: FieldDescriptor::decode_value for every table row.
//
// The first input byte picks the row, the rest is handed over as the
// field payload. Short payloads must fail with an error, never panic.
fuzz_target!(|data: &[u8]| {
    let Some((&pick, payload)) = data.split_first() else {
        return;
    };
    let table = bthome_types::FIELD_TABLE;
    let descriptor = &table[usize::from(pick) % table.len()];
    let _ = descriptor.encoded_len(payload, 0);
    let _ = descriptor.decode_value(payload);
});
