//! Output rendering for decoded payloads.

use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use bthome_decoder::{DecodedReadingSet, VendorData};
use serde::Serialize;

/// Output formats.
///
/// ```text
/// ┌────────┬───────────────────────────────────────────────┐
/// │ Format │ Output                                        │
/// ├────────┼───────────────────────────────────────────────┤
/// │ Json   │ one-line JSON, for piping into other tools    │
/// │ Pretty │ indented JSON                                 │
/// │ Text   │ aligned key/value lines for humans            │
/// └────────┴───────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
    Text,
}

/// Rendering configuration shared by the sub-commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
}

/// Parses the `--format` string.
///
/// # Errors
///
/// Returns an error for unrecognised format names.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "pretty" => Ok(OutputFormat::Pretty),
        "text" | "txt" => Ok(OutputFormat::Text),
        _ => Err(anyhow!("unknown format {s:?}, expected json|pretty|text")),
    }
}

fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let json = if format == OutputFormat::Pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Render a BTHome decode result.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_readings(decoded: &DecodedReadingSet, config: &RenderConfig) -> Result<String> {
    if config.format != OutputFormat::Text {
        return to_json(decoded, config.format);
    }

    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let count = decoded.readings.len();
    let mut out = format!(
        "BTHome v{} (encrypted: {}, trigger: {}), {count} reading{}\n",
        decoded.version,
        yes_no(decoded.encrypted),
        yes_no(decoded.trigger),
        if count == 1 { "" } else { "s" }
    );
    let width = decoded.readings.keys().map(str::len).max().unwrap_or(0);
    for (key, value) in decoded.readings.iter() {
        let _ = writeln!(out, "  {key:<width$}  {value}");
    }
    for tail in &decoded.unknown {
        let _ = writeln!(out, "unknown: {tail}");
    }
    Ok(out)
}

/// Render a vendor manufacturer data result.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_vendor(data: &VendorData, config: &RenderConfig) -> Result<String> {
    if config.format != OutputFormat::Text {
        return to_json(data, config.format);
    }

    let mut out = format!("company: {:#06X}\n", data.company_id);
    if let Some(flags) = data.flags {
        let set: Vec<&str> = [
            (flags.discoverable, "discoverable"),
            (flags.auth_enabled, "auth_enabled"),
            (flags.rpc_enabled, "rpc_enabled"),
            (flags.buzzer_enabled, "buzzer_enabled"),
            (flags.in_pairing_mode, "in_pairing_mode"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        let listed = if set.is_empty() {
            "none".to_owned()
        } else {
            set.join(", ")
        };
        let _ = writeln!(out, "flags:   {listed}");
    }
    if let Some(model_id) = data.model_id {
        let _ = write!(out, "model:   {model_id:#06X}");
        if let Some(short) = data.model_id_short_name {
            let _ = write!(out, " {short}");
        }
        if let Some(long) = data.model_id_long_name {
            let _ = write!(out, " ({long})");
        }
        out.push('\n');
    }
    if let Some(mac) = &data.mac {
        let _ = writeln!(out, "mac:     {mac}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bthome_decoder::{BtHomeDecoder, VendorDecoder};

    fn text() -> RenderConfig {
        RenderConfig {
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn format_names() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("pretty").unwrap(), OutputFormat::Pretty);
        assert_eq!(parse_format("txt").unwrap(), OutputFormat::Text);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn readings_as_text() {
        let decoded =
            BtHomeDecoder::decode(&[0x40, 0x02, 0xCE, 0xFF, 0x01, 0x64, 0xEE, 0x01]).unwrap();
        assert_eq!(
            render_readings(&decoded, &text()).unwrap(),
            "BTHome v2 (encrypted: no, trigger: no), 2 readings\n\
             \x20 temperature  -0.5\n\
             \x20 battery      100\n\
             unknown: 0xee01\n"
        );
    }

    #[test]
    fn readings_as_json() {
        let decoded = BtHomeDecoder::decode(&[0x40, 0x01, 0x64]).unwrap();
        assert_eq!(
            render_readings(&decoded, &RenderConfig::default()).unwrap(),
            r#"{"version":2,"encrypted":false,"trigger":false,"readings":{"battery":100},"unknown":[]}"#
        );
    }

    #[test]
    fn vendor_as_text() {
        let data = VendorDecoder::decode_hex("a90b 0105 00 0b0300 0aaabbccddeeff").unwrap();
        assert_eq!(
            render_vendor(&data, &text()).unwrap(),
            "company: 0x0BA9\n\
             flags:   discoverable, rpc_enabled\n\
             model:   0x0003 SBHT-003C (Shelly BLU H&T)\n\
             mac:     aa:bb:cc:dd:ee:ff\n"
        );
    }
}
