//! The BTHome v2 object id table.
//!
//! Every per-id behavior the decoder has comes from a row here. Rows are
//! kept sorted by id so [`lookup`] can binary search.

use crate::error::TypeError;
use crate::fields::{FieldDescriptor, FieldKind};

const fn uint(id: u8, name: &'static str, width: u8, scale: f64) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind: FieldKind::Integer {
            width,
            signed: false,
            scale,
        },
    }
}

const fn sint(id: u8, name: &'static str, width: u8, scale: f64) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind: FieldKind::Integer {
            width,
            signed: true,
            scale,
        },
    }
}

/// One-byte binary sensor. Reported as 0 or 1 like any other integer.
const fn flag(id: u8, name: &'static str) -> FieldDescriptor {
    uint(id, name, 1, 1.0)
}

const fn custom(id: u8, name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor { id, name, kind }
}

pub static FIELD_TABLE: &[FieldDescriptor] = &[
    uint(0x00, "packet_id", 1, 1.0),
    uint(0x01, "battery", 1, 1.0),
    sint(0x02, "temperature", 2, 0.01),
    uint(0x03, "humidity", 2, 0.01),
    uint(0x04, "pressure", 3, 0.01),
    uint(0x05, "illuminance", 3, 0.01),
    uint(0x06, "mass_kg", 2, 0.01),
    uint(0x07, "mass_lb", 2, 0.01),
    sint(0x08, "dewpoint", 2, 0.01),
    uint(0x09, "count", 1, 1.0),
    uint(0x0A, "energy", 3, 0.001),
    uint(0x0B, "power", 3, 0.01),
    uint(0x0C, "voltage", 2, 0.001),
    uint(0x0D, "pm2_5", 2, 1.0),
    uint(0x0E, "pm10", 2, 1.0),
    flag(0x0F, "generic_boolean"),
    flag(0x10, "power_on"),
    flag(0x11, "opening"),
    uint(0x12, "co2", 2, 1.0),
    uint(0x13, "tvoc", 2, 1.0),
    uint(0x14, "moisture", 2, 0.01),
    flag(0x15, "battery_low"),
    flag(0x16, "battery_charging"),
    flag(0x17, "carbon_monoxide"),
    flag(0x18, "cold"),
    flag(0x19, "connectivity"),
    flag(0x1A, "door"),
    flag(0x1B, "garage_door"),
    flag(0x1C, "gas_detected"),
    flag(0x1D, "heat"),
    flag(0x1E, "light"),
    flag(0x1F, "lock"),
    flag(0x20, "moisture_detected"),
    flag(0x21, "motion"),
    flag(0x22, "moving"),
    flag(0x23, "occupancy"),
    flag(0x24, "plug"),
    flag(0x25, "presence"),
    flag(0x26, "problem"),
    flag(0x27, "running"),
    flag(0x28, "safety"),
    flag(0x29, "smoke"),
    flag(0x2A, "sound"),
    flag(0x2B, "tamper"),
    flag(0x2C, "vibration"),
    flag(0x2D, "window"),
    uint(0x2E, "humidity", 1, 1.0),
    uint(0x2F, "moisture", 1, 1.0),
    custom(0x3A, "button", FieldKind::ButtonEvent),
    custom(0x3C, "dimmer", FieldKind::DimmerEvent),
    uint(0x3D, "count", 2, 1.0),
    uint(0x3E, "count", 4, 1.0),
    sint(0x3F, "rotation", 2, 0.1),
    uint(0x40, "distance_mm", 2, 1.0),
    uint(0x41, "distance_m", 2, 0.1),
    uint(0x42, "duration", 3, 0.001),
    uint(0x43, "current", 2, 0.001),
    uint(0x44, "speed", 2, 0.01),
    sint(0x45, "temperature", 2, 0.1),
    uint(0x46, "uv_index", 1, 0.1),
    uint(0x47, "volume", 2, 0.1),
    uint(0x48, "volume_ml", 2, 1.0),
    uint(0x49, "volume_flow_rate", 2, 0.001),
    uint(0x4A, "voltage", 2, 0.1),
    uint(0x4B, "gas", 3, 0.001),
    uint(0x4C, "gas", 4, 0.001),
    uint(0x4D, "energy", 4, 0.001),
    uint(0x4E, "volume", 4, 0.001),
    uint(0x4F, "water", 4, 0.001),
    custom(0x50, "timestamp", FieldKind::Timestamp),
    uint(0x51, "acceleration", 2, 0.001),
    uint(0x52, "gyroscope", 2, 0.001),
    custom(0x53, "text", FieldKind::Text),
    custom(0x54, "raw", FieldKind::Raw),
    uint(0x55, "volume_storage", 4, 0.001),
    uint(0x56, "conductivity", 2, 1.0),
    sint(0x57, "temperature", 1, 1.0),
    sint(0x58, "temperature", 1, 0.35),
    sint(0x59, "count", 1, 1.0),
    sint(0x5A, "count", 2, 1.0),
    sint(0x5B, "count", 4, 1.0),
    sint(0x5C, "power", 4, 0.01),
    sint(0x5D, "current", 2, 0.001),
    uint(0x5E, "direction", 2, 0.01),
    uint(0x5F, "precipitation", 2, 0.1),
    uint(0x60, "channel", 1, 1.0),
    uint(0x61, "rotational_speed", 2, 1.0),
    uint(0xF0, "device_type_id", 2, 1.0),
    custom(0xF1, "firmware_version", FieldKind::FirmwareLong),
    custom(0xF2, "firmware_version", FieldKind::FirmwareShort),
];

/// Find the descriptor for an object id.
pub fn lookup(id: u8) -> Option<&'static FieldDescriptor> {
    FIELD_TABLE
        .binary_search_by_key(&id, |d| d.id)
        .ok()
        .map(|idx| &FIELD_TABLE[idx])
}

/// Check every row is decodable and ids are strictly increasing.
///
/// # Errors
///
/// Returns the first [`TypeError::InvalidDescriptor`] or
/// [`TypeError::TableOrder`] found.
pub fn validate_table() -> Result<(), TypeError> {
    validate(FIELD_TABLE)
}

fn validate(table: &[FieldDescriptor]) -> Result<(), TypeError> {
    for pair in table.windows(2) {
        if pair[0].id >= pair[1].id {
            return Err(TypeError::TableOrder { id: pair[1].id });
        }
    }
    table.iter().try_for_each(FieldDescriptor::validate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldWidth;

    #[test]
    fn shipped_table_is_valid() {
        validate_table().unwrap();
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup(0x02).unwrap().name, "temperature");
        assert_eq!(lookup(0x3A).unwrap().kind, FieldKind::ButtonEvent);
        assert_eq!(lookup(0xF2).unwrap().kind, FieldKind::FirmwareShort);
        assert!(lookup(0x30).is_none());
        assert!(lookup(0x3B).is_none());
        assert!(lookup(0xFF).is_none());
    }

    #[test]
    fn names_are_shared_across_encodings() {
        let temperatures = FIELD_TABLE
            .iter()
            .filter(|d| d.name == "temperature")
            .count();
        assert_eq!(temperatures, 4);
        assert_eq!(lookup(0x03).unwrap().name, lookup(0x2E).unwrap().name);
    }

    #[test]
    fn only_blob_kinds_are_length_prefixed() {
        for d in FIELD_TABLE {
            let prefixed = d.kind.width() == FieldWidth::LengthPrefixed;
            assert_eq!(
                prefixed,
                matches!(d.kind, FieldKind::Text | FieldKind::Raw),
                "object id {:#04X}",
                d.id
            );
        }
    }

    #[test]
    fn rejects_unsorted_table() {
        let table = [uint(0x02, "b", 1, 1.0), uint(0x01, "a", 1, 1.0)];
        assert_eq!(validate(&table), Err(TypeError::TableOrder { id: 0x01 }));
    }

    #[test]
    fn rejects_defective_row() {
        let table = [uint(0x01, "a", 1, 1.0), uint(0x02, "b", 7, 1.0)];
        assert!(matches!(
            validate(&table),
            Err(TypeError::InvalidDescriptor { id: 0x02, .. })
        ));
    }
}
