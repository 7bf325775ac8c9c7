/// Implementation of `bthome fields`.
///
/// Prints one line per object id in the field table:
///
/// ```text
/// 0x02  temperature       sint16          × 0.01
/// 0x3A  button            button event
/// 0x53  text              length-prefixed text
/// ```
use anyhow::Result;
use bthome_types::{FIELD_TABLE, FieldKind};

use crate::FieldsArgs;

/// Run the `bthome fields` command.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
pub fn run(args: &FieldsArgs) -> Result<()> {
    let filter = args.name.as_deref().map(str::to_lowercase);
    for descriptor in FIELD_TABLE {
        if let Some(ref needle) = filter
            && !descriptor.name.contains(needle.as_str())
        {
            continue;
        }
        println!(
            "{:#04X}  {:<18}{}",
            descriptor.id,
            descriptor.name,
            describe(&descriptor.kind)
        );
    }
    Ok(())
}

/// Short human description of a field kind.
fn describe(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Integer {
            width,
            signed,
            scale,
        } => {
            let ty = format!("{}int{}", if *signed { "s" } else { "u" }, width * 8);
            if (*scale - 1.0).abs() < f64::EPSILON {
                ty
            } else {
                format!("{ty:<16}× {scale}")
            }
        }
        FieldKind::ButtonEvent => "button event".to_owned(),
        FieldKind::DimmerEvent => "dimmer event (kind, steps)".to_owned(),
        FieldKind::Timestamp => "uint32 unix time → ISO-8601".to_owned(),
        FieldKind::FirmwareLong => "firmware a.b.c.d (4 bytes)".to_owned(),
        FieldKind::FirmwareShort => "firmware a.b.c (3 bytes)".to_owned(),
        FieldKind::Text => "length-prefixed text".to_owned(),
        FieldKind::Raw => "length-prefixed raw (hex)".to_owned(),
    }
}
