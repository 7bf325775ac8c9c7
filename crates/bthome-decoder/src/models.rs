//! Model id → name tables for vendor manufacturer data.
//!
//! The two tables are independent: an id may have a short name and no
//! long name.

static SHORT_NAMES: &[(u16, &str)] = &[
    (0x0001, "SBBT-002C"),
    (0x0002, "SBDW-002C"),
    (0x0003, "SBHT-003C"),
    (0x0005, "SBMO-003Z"),
    (0x0006, "SBBT-004CEU"),
    (0x0007, "SBBT-004CUS"),
    (0x0008, "SBBT-EU001"),
];

static LONG_NAMES: &[(u16, &str)] = &[
    (0x0001, "Shelly BLU Button1"),
    (0x0002, "Shelly BLU Door/Window"),
    (0x0003, "Shelly BLU H&T"),
    (0x0005, "Shelly BLU Motion"),
    (0x0006, "Shelly BLU Wall Switch 4"),
    (0x0007, "Shelly BLU RC Button 4"),
];

fn find(table: &'static [(u16, &'static str)], model_id: u16) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(id, name)| (id == model_id).then_some(name))
}

/// Product code, e.g. `SBHT-003C`.
pub fn short_name(model_id: u16) -> Option<&'static str> {
    find(SHORT_NAMES, model_id)
}

/// Marketing name, e.g. `Shelly BLU H&T`.
pub fn long_name(model_id: u16) -> Option<&'static str> {
    find(LONG_NAMES, model_id)
}
